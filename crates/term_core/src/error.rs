//! Search error types.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur during a search.
///
/// Errors scoped to a single file ([`SearchError::FileOpen`] and
/// [`SearchError::Scan`]) are recoverable: the search skips that file and
/// moves on. Every other variant ends the search.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The search term is empty.
    #[error("search term must not be empty")]
    EmptyTerm,

    /// The root path does not exist or cannot be traversed.
    #[error("cannot search {}: {source}", path.display())]
    Path {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A directory below the root could not be read.
    #[error("failed to traverse {}: {source}", path.display())]
    Traversal {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A candidate file could not be opened.
    #[error("failed to open {}: {source}", path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading a file failed part way through.
    #[error("failed to read {} at line {line}: {kind}", path.display())]
    Scan {
        path: PathBuf,
        line: u64,
        kind: ScanErrorKind,
    },
}

/// Why scanning a file stopped early.
#[derive(Debug, Error)]
pub enum ScanErrorKind {
    /// The underlying reader failed.
    #[error("{0}")]
    Io(#[from] io::Error),

    /// A single line was longer than the configured limit.
    #[error("line exceeds {limit} bytes")]
    LineTooLong { limit: usize },
}

impl SearchError {
    /// Returns `true` if the error ends the whole search.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::FileOpen { .. } | Self::Scan { .. })
    }

    /// The path the error refers to, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::EmptyTerm => None,
            Self::Path { path, .. }
            | Self::Traversal { path, .. }
            | Self::FileOpen { path, .. }
            | Self::Scan { path, .. } => Some(path.as_path()),
        }
    }
}
