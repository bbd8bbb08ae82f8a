//! Content responder module
//!
//! Serves file bytes for raw targets and the parsed document for `.json`
//! targets, per the resolver's classification.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};

use crate::error::ApiError;
use crate::http::{mime, response};
use crate::storage::{FileKind, FileStore, ResolvedFile};

/// Serve the content route for a requested fragment
pub async fn serve(
    store: &FileStore,
    fragment: &str,
) -> Result<Response<Full<Bytes>>, ApiError> {
    let file = store
        .resolve(fragment)
        .ok_or_else(|| ApiError::bad_request("Filename is required"))?;

    match file.kind {
        FileKind::Json => serve_json(store, &file).await,
        FileKind::Raw => serve_raw(store, &file).await,
    }
}

/// Raw variant: file bytes with an inferred content type
async fn serve_raw(
    store: &FileStore,
    file: &ResolvedFile,
) -> Result<Response<Full<Bytes>>, ApiError> {
    let data = store
        .read(file)
        .await
        .map_err(|e| ApiError::from_io(&e, "File not found", "Error reading file"))?;

    Ok(response::file_response(data, mime::content_type_for(&file.ext)))
}

/// JSON variant: parse the document and return it as the response body
async fn serve_json(
    store: &FileStore,
    file: &ResolvedFile,
) -> Result<Response<Full<Bytes>>, ApiError> {
    let text = store
        .read_to_string(file)
        .await
        .map_err(|e| ApiError::from_io(&e, "File not found", "Error reading file"))?;

    if text.trim().is_empty() {
        return Err(ApiError::not_found("File is empty or invalid"));
    }

    let value: serde_json::Value = serde_json::from_str(&text)
        .map_err(|_| ApiError::internal("Failed to parse JSON"))?;

    Ok(response::json_response(StatusCode::OK, &value))
}
