//! Search request definition.

use std::path::{Path, PathBuf};

use crate::error::SearchError;

/// Everything a single search run needs to know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    /// Directory (or single file) to search.
    pub root_path: PathBuf,
    /// Substring to look for.
    pub term: String,
    /// Whether to fold case before comparing.
    /// Default: false
    pub case_insensitive: bool,
    /// Only files with exactly this extension (leading dot included) are
    /// scanned. `None` scans every file.
    pub extension_filter: Option<String>,
    /// Maximum length of a single line in bytes.
    /// Default: None (no limit)
    pub max_line_bytes: Option<usize>,
}

impl SearchRequest {
    /// Creates a case-sensitive request without filters.
    pub fn new(root_path: impl Into<PathBuf>, term: impl Into<String>) -> Self {
        Self {
            root_path: root_path.into(),
            term: term.into(),
            case_insensitive: false,
            extension_filter: None,
            max_line_bytes: None,
        }
    }

    /// Enables or disables case-insensitive matching.
    pub fn case_insensitive(mut self, yes: bool) -> Self {
        self.case_insensitive = yes;
        self
    }

    /// Restricts the search to one extension, e.g. `".json"`.
    ///
    /// An empty string clears the filter.
    pub fn extension(mut self, ext: impl Into<String>) -> Self {
        let ext = ext.into();
        self.extension_filter = if ext.is_empty() { None } else { Some(ext) };
        self
    }

    /// Sets the per-line byte limit.
    pub fn max_line_bytes(mut self, limit: usize) -> Self {
        self.max_line_bytes = Some(limit);
        self
    }

    /// Checks the request before any traversal happens.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.term.is_empty() {
            return Err(SearchError::EmptyTerm);
        }
        if let Some(ext) = &self.extension_filter
            && !ext.starts_with('.')
        {
            tracing::warn!(
                "Extension filter {:?} has no leading '.', no file will match",
                ext
            );
        }
        Ok(())
    }

    /// Returns `true` if `path` passes the extension filter.
    pub fn accepts(&self, path: &Path) -> bool {
        match &self.extension_filter {
            Some(ext) => dotted_extension(path) == Some(ext.as_str()),
            None => true,
        }
    }
}

/// Extension of the final path element, starting at its last `.`.
///
/// Unlike [`Path::extension`], the dot is kept and dot files count as
/// extensions (`.bashrc` yields `".bashrc"`).
pub fn dotted_extension(path: &Path) -> Option<&str> {
    let name = path.file_name()?.to_str()?;
    name.rfind('.').map(|idx| &name[idx..])
}
