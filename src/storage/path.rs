//! Path normalization module
//!
//! Canonicalizes requested path fragments so the joined result can never
//! leave the storage root, and classifies targets by extension.

use std::path::{Component, Path, PathBuf};

/// How the content endpoint treats a resolved file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// Parsed and returned as a structured JSON response
    Json,
    /// Returned byte-for-byte with an inferred content type
    Raw,
}

/// Normalize a requested fragment into a safe relative path.
///
/// `.` segments and absolute-path prefixes are dropped; `..` pops the
/// previously accepted segment and is discarded at the top, so the result
/// is always relative and cannot climb above whatever it is joined onto.
/// Returns `None` when nothing remains after normalization.
pub fn sanitize(fragment: &str) -> Option<PathBuf> {
    let mut clean = PathBuf::new();
    for component in Path::new(fragment).components() {
        match component {
            Component::Normal(part) => clean.push(part),
            Component::ParentDir => {
                clean.pop();
            }
            Component::CurDir | Component::RootDir | Component::Prefix(_) => {}
        }
    }

    if clean.as_os_str().is_empty() {
        None
    } else {
        Some(clean)
    }
}

/// Lowercased extension with its leading dot, or an empty string
pub fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{}", e.to_lowercase()))
        .unwrap_or_default()
}

/// Classify by trailing extension, case-insensitively
pub fn classify(path: &Path) -> FileKind {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => FileKind::Json,
        _ => FileKind::Raw,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_plain_path() {
        assert_eq!(sanitize("report.json"), Some(PathBuf::from("report.json")));
        assert_eq!(sanitize("docs/a.txt"), Some(PathBuf::from("docs/a.txt")));
    }

    #[test]
    fn test_sanitize_collapses_dot_segments() {
        assert_eq!(sanitize("./docs/./a.txt"), Some(PathBuf::from("docs/a.txt")));
        assert_eq!(sanitize("docs/sub/../a.txt"), Some(PathBuf::from("docs/a.txt")));
    }

    #[test]
    fn test_sanitize_blocks_traversal() {
        assert_eq!(sanitize("../../etc/passwd"), Some(PathBuf::from("etc/passwd")));
        assert_eq!(sanitize("a/../../b"), Some(PathBuf::from("b")));
        assert_eq!(sanitize("/etc/passwd"), Some(PathBuf::from("etc/passwd")));
    }

    #[test]
    fn test_sanitize_empty_results() {
        assert_eq!(sanitize(""), None);
        assert_eq!(sanitize("."), None);
        assert_eq!(sanitize(".."), None);
        assert_eq!(sanitize("a/.."), None);
        assert_eq!(sanitize("/"), None);
    }

    #[test]
    fn test_extension_of() {
        assert_eq!(extension_of(Path::new("report.json")), ".json");
        assert_eq!(extension_of(Path::new("DATA.JSON")), ".json");
        assert_eq!(extension_of(Path::new("archive.tar.gz")), ".gz");
        assert_eq!(extension_of(Path::new("README")), "");
    }

    #[test]
    fn test_classify_is_case_insensitive() {
        assert_eq!(classify(Path::new("a.json")), FileKind::Json);
        assert_eq!(classify(Path::new("a.JSON")), FileKind::Json);
        assert_eq!(classify(Path::new("a.Json")), FileKind::Json);
        assert_eq!(classify(Path::new("a.txt")), FileKind::Raw);
        assert_eq!(classify(Path::new("json")), FileKind::Raw);
    }
}
