//! Landing page module
//!
//! Serves the configured landing file at `/`, falling back to an embedded
//! page when it is missing.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::sync::Arc;
use tokio::fs;

use crate::config::AppState;
use crate::error::ApiError;
use crate::http::response;
use crate::logger;

/// Serve the landing page
pub async fn serve(state: &Arc<AppState>) -> Result<Response<Full<Bytes>>, ApiError> {
    let page = &state.config.storage.landing_page;
    let html = match fs::read_to_string(page).await {
        Ok(content) => content,
        Err(e) => {
            logger::log_warning(&format!("Failed to load landing page '{page}': {e}"));
            fallback_page().to_string()
        }
    };

    Ok(response::html_response(html))
}

/// Embedded page used when no landing file is present
const fn fallback_page() -> &'static str {
    r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>FileServe</title>
</head>
<body>
    <h1>FileServe</h1>
    <p>A minimal file content and metadata API.</p>
    <ul>
        <li>File content: <code>GET /files/&lt;path&gt;</code></li>
        <li>File metadata: <code>GET /api/files/&lt;path&gt;</code></li>
    </ul>
</body>
</html>"#
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{
        Config, HttpConfig, LoggingConfig, PerformanceConfig, ServerConfig, StorageConfig,
    };
    use http_body_util::BodyExt;

    #[tokio::test]
    async fn test_fallback_served_when_landing_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 7000,
                workers: None,
            },
            storage: StorageConfig {
                root: dir.path().to_str().unwrap().to_string(),
                landing_page: dir
                    .path()
                    .join("no-such-index.html")
                    .to_str()
                    .unwrap()
                    .to_string(),
            },
            http: HttpConfig {
                server_name: "FileServe/0.1".to_string(),
                enable_cors: true,
                base_url: None,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                access_log: false,
            },
            performance: PerformanceConfig {
                keep_alive_timeout: 75,
                read_timeout: 30,
                write_timeout: 30,
                max_connections: None,
            },
        };
        let state = Arc::new(AppState::new(&config));

        let resp = serve(&state).await.unwrap();
        assert_eq!(resp.status(), 200);
        let body = resp.into_body().collect().await.unwrap().to_bytes();
        let text = String::from_utf8(body.to_vec()).unwrap();
        assert!(text.contains("FileServe"));
        assert!(text.contains("/api/files/"));
    }
}
