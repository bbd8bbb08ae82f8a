//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: parses the URL into a route,
//! dispatches to the responders, and converts every handler error into
//! the uniform error response in exactly one place.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::HeaderValue;
use hyper::{Method, Request, Response, Uri};
use std::convert::Infallible;
use std::sync::Arc;

use crate::config::AppState;
use crate::error::ApiError;
use crate::handler::{content, landing, metadata};
use crate::http::response;
use crate::logger;

/// Routes understood by the server
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route<'a> {
    /// `GET /` - landing page
    Landing,
    /// `GET /files/<fragment>` - file content
    Content(&'a str),
    /// `GET /api/files/<fragment>` - file metadata
    Metadata(&'a str),
    /// Anything else
    Unmatched,
}

impl<'a> Route<'a> {
    /// Parse a request path into a route, capturing the wildcard tail
    pub fn parse(path: &'a str) -> Self {
        if path == "/" {
            return Self::Landing;
        }
        if let Some(fragment) = strip_route_prefix(path, "/api/files") {
            return Self::Metadata(fragment);
        }
        if let Some(fragment) = strip_route_prefix(path, "/files") {
            return Self::Content(fragment);
        }
        Self::Unmatched
    }
}

/// Strip a route prefix, returning the wildcard remainder.
/// `/files` and `/files/` both yield an empty fragment.
fn strip_route_prefix<'a>(path: &'a str, prefix: &str) -> Option<&'a str> {
    let rest = path.strip_prefix(prefix)?;
    if rest.is_empty() {
        Some("")
    } else {
        rest.strip_prefix('/')
    }
}

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method().clone();
    let uri = req.uri().clone();

    let access_log = state
        .cached_access_log
        .load(std::sync::atomic::Ordering::Relaxed);
    if access_log {
        logger::log_request(&method, &uri, req.version());
    }

    // Preflight requests are answered directly
    if method == Method::OPTIONS {
        return Ok(response::options_response(state.config.http.enable_cors));
    }

    let mut resp = match dispatch(&method, &uri, &state).await {
        Ok(resp) => resp,
        Err(err) => {
            logger::log_warning(&format!(
                "{method} {uri} -> {} {}",
                err.status.as_u16(),
                err.message
            ));
            response::error_response(&err, method.as_str(), &uri.to_string())
        }
    };

    if let Ok(server_name) = HeaderValue::from_str(&state.config.http.server_name) {
        resp.headers_mut().insert("Server", server_name);
    }
    if state.config.http.enable_cors {
        response::apply_cors(&mut resp);
    }
    if access_log {
        logger::log_response(resp.status().as_u16());
    }

    Ok(resp)
}

/// Route the request and run the matching responder
async fn dispatch(
    method: &Method,
    uri: &Uri,
    state: &Arc<AppState>,
) -> Result<Response<Full<Bytes>>, ApiError> {
    // Only GET routes are registered; everything else falls through to
    // the catch-all below
    if *method == Method::GET {
        match Route::parse(uri.path()) {
            Route::Landing => return landing::serve(state).await,
            Route::Content(fragment) => return content::serve(&state.store, fragment).await,
            Route::Metadata(fragment) => return metadata::serve(state, fragment).await,
            Route::Unmatched => {}
        }
    }

    Err(ApiError::not_found(format!(
        "The requested route '{uri}' using method '{method}' does not exist."
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_landing() {
        assert_eq!(Route::parse("/"), Route::Landing);
    }

    #[test]
    fn test_parse_content_routes() {
        assert_eq!(Route::parse("/files/a.txt"), Route::Content("a.txt"));
        assert_eq!(Route::parse("/files/docs/a.json"), Route::Content("docs/a.json"));
        assert_eq!(Route::parse("/files/"), Route::Content(""));
        assert_eq!(Route::parse("/files"), Route::Content(""));
    }

    #[test]
    fn test_parse_metadata_routes() {
        assert_eq!(Route::parse("/api/files/a.txt"), Route::Metadata("a.txt"));
        assert_eq!(Route::parse("/api/files/"), Route::Metadata(""));
        assert_eq!(Route::parse("/api/files"), Route::Metadata(""));
    }

    #[test]
    fn test_parse_unmatched_routes() {
        assert_eq!(Route::parse("/nope"), Route::Unmatched);
        assert_eq!(Route::parse("/filesystem"), Route::Unmatched);
        assert_eq!(Route::parse("/api/filesystem"), Route::Unmatched);
        assert_eq!(Route::parse("/api"), Route::Unmatched);
        assert_eq!(Route::parse(""), Route::Unmatched);
    }
}
