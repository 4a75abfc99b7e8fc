//! Error handling types and utilities.

use std::path::PathBuf;

/// A specialized Result type for folio-search plumbing.
///
/// This is an alias for `anyhow::Result` with context added via `.context()` and
/// `.with_context()` in the binary and server setup.
pub type Result<T> = anyhow::Result<T>;

/// Error returned when a content collaborator cannot produce its records.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// A content file or directory could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// A post is missing its `+++` front-matter block or the block is unusable.
    #[error("invalid front matter in {}: {reason}", .path.display())]
    FrontMatter { path: PathBuf, reason: String },
    /// Front matter or the project list is not valid TOML for the expected shape.
    #[error("failed to parse {}: {source}", .path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    /// The posts directory walk failed.
    #[error("failed to walk content directory: {0}")]
    Walk(#[from] ignore::Error),
}

impl ContentError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
