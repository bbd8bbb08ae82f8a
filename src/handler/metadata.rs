//! Metadata responder module
//!
//! Reports file attributes (size, timestamps, extension, content URL)
//! without returning content.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde::Serialize;
use std::sync::Arc;

use crate::config::AppState;
use crate::error::ApiError;
use crate::http::response;

/// Metadata reported for a single file
#[derive(Debug, Serialize)]
pub struct FileMetadata {
    pub filename: String,
    pub size: u64,
    pub modified: String,
    pub created: String,
    pub ext: String,
    pub url: String,
}

/// Serve the metadata route for a requested fragment
pub async fn serve(
    state: &Arc<AppState>,
    fragment: &str,
) -> Result<Response<Full<Bytes>>, ApiError> {
    let file = state
        .store
        .resolve(fragment)
        .ok_or_else(|| ApiError::bad_request("Filename is required"))?;

    // Cheap existence check before the stat call
    if !state.store.exists(&file).await {
        return Err(ApiError::not_found("File not found"));
    }

    // The file can still vanish between the check and the stat
    let stat = state
        .store
        .stat(&file)
        .await
        .map_err(|e| ApiError::from_io(&e, "File not found", "Error retrieving file metadata"))?;

    let url = format!("{}/files/{}", state.config.content_url_base(), file.filename);
    let body = FileMetadata {
        filename: file.filename,
        size: stat.size,
        modified: stat.modified,
        created: stat.created,
        ext: file.ext,
        url,
    };

    Ok(response::json_response(StatusCode::OK, &body))
}
