//! Storage module
//!
//! Filesystem access anchored at a fixed root directory. All existence
//! checks, stat calls, and reads go through `FileStore`, which also owns
//! the resolution of requested path fragments.

pub mod path;

use chrono::{DateTime, SecondsFormat, Utc};
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tokio::fs;

pub use path::FileKind;

/// A requested fragment resolved against the storage root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFile {
    /// Full on-disk path: root joined with the normalized fragment
    pub filepath: PathBuf,
    /// Normalized fragment, forward-slash separated
    pub filename: String,
    /// Lowercased extension with leading dot, empty if none
    pub ext: String,
    /// Content handling selected by the extension
    pub kind: FileKind,
}

/// File attributes reported by the metadata endpoint
#[derive(Debug, Clone)]
pub struct FileStat {
    pub size: u64,
    pub modified: String,
    pub created: String,
}

/// Filesystem accessor bound to a fixed root directory
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create the root directory if missing. Recursive and idempotent;
    /// called once at startup, never on the request path.
    pub async fn ensure_root(&self) -> std::io::Result<()> {
        fs::create_dir_all(&self.root).await
    }

    /// Resolve a raw fragment into a root-anchored file reference.
    /// Returns `None` for an empty fragment or one that normalizes away.
    pub fn resolve(&self, fragment: &str) -> Option<ResolvedFile> {
        let clean = path::sanitize(fragment)?;
        let filename = clean
            .iter()
            .filter_map(|part| part.to_str())
            .collect::<Vec<_>>()
            .join("/");

        Some(ResolvedFile {
            filepath: self.root.join(&clean),
            filename,
            ext: path::extension_of(&clean),
            kind: path::classify(&clean),
        })
    }

    /// Non-blocking existence check; I/O errors count as absent
    pub async fn exists(&self, file: &ResolvedFile) -> bool {
        fs::try_exists(&file.filepath).await.unwrap_or(false)
    }

    /// Stat a resolved file, formatting timestamps the way the metadata
    /// endpoint reports them
    pub async fn stat(&self, file: &ResolvedFile) -> std::io::Result<FileStat> {
        let meta = fs::metadata(&file.filepath).await?;
        let modified = meta.modified()?;
        // Birth time is unavailable on some platforms and filesystems
        let created = meta.created().unwrap_or(modified);

        Ok(FileStat {
            size: meta.len(),
            modified: format_timestamp(modified),
            created: format_timestamp(created),
        })
    }

    pub async fn read(&self, file: &ResolvedFile) -> std::io::Result<Vec<u8>> {
        fs::read(&file.filepath).await
    }

    pub async fn read_to_string(&self, file: &ResolvedFile) -> std::io::Result<String> {
        fs::read_to_string(&file.filepath).await
    }
}

/// RFC 3339 UTC with millisecond precision, the metadata wire format
fn format_timestamp(time: SystemTime) -> String {
    DateTime::<Utc>::from(time).to_rfc3339_opts(SecondsFormat::Millis, true)
}
