//! API error module
//!
//! Uniform error taxonomy and the serialized body every failure path
//! returns, regardless of which route produced it.

use chrono::{SecondsFormat, Utc};
use hyper::StatusCode;
use serde::Serialize;

/// Request-level error carrying the HTTP status and a client-facing message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }

    /// Map an I/O failure: a vanished file is a 404, anything else a 500
    pub fn from_io(err: &std::io::Error, not_found_message: &str, internal_message: &str) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            Self::not_found(not_found_message)
        } else {
            Self::internal(internal_message)
        }
    }

    /// Reason phrase reported as `errorType` in the serialized body
    pub fn error_type(&self) -> &'static str {
        match self.status {
            StatusCode::BAD_REQUEST => "Bad Request",
            StatusCode::NOT_FOUND => "Not Found",
            _ => "Internal Server Error",
        }
    }

    /// Build the wire body for this error as seen by `method` + `url`
    pub fn to_body(&self, method: &str, url: &str) -> ErrorBody {
        ErrorBody {
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            method: method.to_string(),
            url: url.to_string(),
            status_code: self.status.as_u16(),
            error_type: self.error_type().to_string(),
            message: self.message.clone(),
        }
    }
}

/// Serialized error shape shared by every route
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub timestamp: String,
    pub method: String,
    pub url: String,
    pub status_code: u16,
    pub error_type: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_type_phrases() {
        assert_eq!(ApiError::bad_request("x").error_type(), "Bad Request");
        assert_eq!(ApiError::not_found("x").error_type(), "Not Found");
        assert_eq!(ApiError::internal("x").error_type(), "Internal Server Error");
    }

    #[test]
    fn test_from_io_maps_missing_file_to_404() {
        let err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let api = ApiError::from_io(&err, "File not found", "Error reading file");
        assert_eq!(api.status, StatusCode::NOT_FOUND);
        assert_eq!(api.message, "File not found");
    }

    #[test]
    fn test_from_io_maps_other_failures_to_500() {
        let err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope");
        let api = ApiError::from_io(&err, "File not found", "Error reading file");
        assert_eq!(api.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api.message, "Error reading file");
    }

    #[test]
    fn test_body_wire_shape() {
        let err = ApiError::not_found("File not found");
        let body = err.to_body("GET", "/api/files/missing.txt");
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["method"], "GET");
        assert_eq!(json["url"], "/api/files/missing.txt");
        assert_eq!(json["statusCode"], 404);
        assert_eq!(json["errorType"], "Not Found");
        assert_eq!(json["message"], "File not found");
        // ISO-8601 UTC with millisecond precision
        let ts = json["timestamp"].as_str().unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(ts).is_ok());
        assert!(ts.ends_with('Z'));
    }
}
