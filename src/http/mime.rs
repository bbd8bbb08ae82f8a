//! MIME type detection module
//!
//! Maps a lowercased file extension (leading dot included, as produced by
//! the resolver) to the Content-Type sent with raw file responses.

/// Get the Content-Type for a resolved extension
pub fn content_type_for(ext: &str) -> &'static str {
    match ext {
        // Text
        ".html" | ".htm" => "text/html; charset=utf-8",
        ".css" => "text/css",
        ".txt" | ".md" | ".log" => "text/plain; charset=utf-8",
        ".csv" => "text/csv",
        ".xml" => "application/xml",

        // JavaScript/JSON
        ".js" | ".mjs" => "application/javascript",
        ".json" => "application/json",

        // Images
        ".png" => "image/png",
        ".jpg" | ".jpeg" => "image/jpeg",
        ".gif" => "image/gif",
        ".svg" => "image/svg+xml",
        ".ico" => "image/x-icon",
        ".webp" => "image/webp",

        // Audio/Video
        ".mp3" => "audio/mpeg",
        ".wav" => "audio/wav",
        ".mp4" => "video/mp4",
        ".webm" => "video/webm",

        // Documents/Archives
        ".pdf" => "application/pdf",
        ".zip" => "application/zip",
        ".gz" => "application/gzip",
        ".tar" => "application/x-tar",

        // Default
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_types() {
        assert_eq!(content_type_for(".html"), "text/html; charset=utf-8");
        assert_eq!(content_type_for(".json"), "application/json");
        assert_eq!(content_type_for(".png"), "image/png");
        assert_eq!(content_type_for(".pdf"), "application/pdf");
    }

    #[test]
    fn test_unknown_extension_falls_back() {
        assert_eq!(content_type_for(".xyz"), "application/octet-stream");
        assert_eq!(content_type_for(""), "application/octet-stream");
    }
}
