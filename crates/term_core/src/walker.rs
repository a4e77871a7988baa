//! Deterministic file walker built on `walkdir`.
//!
//! Entries are visited depth-first and sorted by file name at every level, so
//! repeated walks over an unchanged tree yield the same sequence. Symbolic
//! links are never followed and never yielded.

use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::error::SearchError;
use crate::request::SearchRequest;

/// One step of the walk.
#[derive(Debug)]
pub enum WalkEvent {
    /// A regular file that passed the extension filter.
    File(PathBuf),
    /// A regular file rejected by the extension filter.
    Filtered(PathBuf),
}

/// Lazily enumerates candidate files below a root.
pub struct FileWalker<'a> {
    request: &'a SearchRequest,
    inner: walkdir::IntoIter,
    done: bool,
}

impl<'a> FileWalker<'a> {
    /// Creates a walker for `request.root_path`.
    pub fn new(request: &'a SearchRequest) -> Self {
        let inner = WalkDir::new(&request.root_path)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter();

        Self {
            request,
            inner,
            done: false,
        }
    }

    fn traversal_error(&self, err: walkdir::Error) -> SearchError {
        let path = err
            .path()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.request.root_path.clone());
        let message = err.to_string();
        let source = err
            .into_io_error()
            .unwrap_or_else(|| io::Error::other(message));

        SearchError::Traversal { path, source }
    }
}

impl Iterator for FileWalker<'_> {
    type Item = Result<WalkEvent, SearchError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        loop {
            let entry = match self.inner.next()? {
                Ok(entry) => entry,
                Err(e) => {
                    self.done = true;
                    return Some(Err(self.traversal_error(e)));
                }
            };

            if !entry.file_type().is_file() {
                if entry.path_is_symlink() {
                    debug!("Skipping symlink {}", entry.path().display());
                }
                continue;
            }

            let path = trim_current_dir(entry.into_path());
            if self.request.accepts(&path) {
                return Some(Ok(WalkEvent::File(path)));
            }
            return Some(Ok(WalkEvent::Filtered(path)));
        }
    }
}

/// Drops leading `.` components so a walk rooted at `.` reports `a.txt`
/// rather than `./a.txt`.
fn trim_current_dir(path: PathBuf) -> PathBuf {
    match path.strip_prefix(".") {
        Ok(rest) if !rest.as_os_str().is_empty() => trim_current_dir(rest.to_path_buf()),
        _ => path,
    }
}
