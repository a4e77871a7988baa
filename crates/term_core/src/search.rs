//! The search pipeline: walk, filter, scan, report.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Serialize, Serializer};
use tracing::debug;

use crate::error::SearchError;
use crate::matcher::Matcher;
use crate::request::SearchRequest;
use crate::scan::FileScanner;
use crate::walker::{FileWalker, WalkEvent};

/// A line that contains the search term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Match {
    /// Path as encountered during traversal.
    #[serde(serialize_with = "serialize_path_lossy")]
    pub path: PathBuf,
    /// 1-based line number.
    #[serde(rename = "line")]
    pub line_number: u64,
}

impl Match {
    pub fn new(path: PathBuf, line_number: u64) -> Self {
        Self { path, line_number }
    }
}

/// Paths that are not valid UTF-8 are written with replacement characters
/// rather than failing, matching what text output shows.
fn serialize_path_lossy<S: Serializer>(path: &Path, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&path.to_string_lossy())
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}  ln: {}", self.path.display(), self.line_number)
    }
}

/// Counters collected while a search runs.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    /// Files successfully opened and scanned (including ones that failed mid-way).
    pub files_scanned: usize,
    /// Files rejected by the extension filter.
    pub files_filtered: usize,
    /// Lines read across all files.
    pub lines_read: u64,
    /// Matches yielded.
    pub matches: usize,
}

/// Starts a search.
///
/// Fails up front if the request is invalid or the root cannot be read.
/// Otherwise returns a lazy iterator over matches in traversal order.
pub fn search(request: &SearchRequest) -> Result<Search<'_>, SearchError> {
    request.validate()?;

    if let Err(source) = fs::metadata(&request.root_path) {
        return Err(SearchError::Path {
            path: request.root_path.clone(),
            source,
        });
    }

    debug!(
        "Searching {} for {:?} (icase: {}, ext: {:?})",
        request.root_path.display(),
        request.term,
        request.case_insensitive,
        request.extension_filter
    );

    Ok(Search {
        request,
        matcher: Matcher::new(&request.term, request.case_insensitive),
        walker: FileWalker::new(request),
        current: None,
        stats: SearchStats::default(),
        finished: false,
    })
}

/// Lazy, single-pass sequence of matches.
///
/// Yields `Err` for per-file failures and keeps going; a fatal error is
/// yielded once and ends the sequence. At most one file is open at a time.
pub struct Search<'a> {
    request: &'a SearchRequest,
    matcher: Matcher,
    walker: FileWalker<'a>,
    current: Option<FileScanner>,
    stats: SearchStats,
    finished: bool,
}

impl Search<'_> {
    /// Counters so far; final once the iterator is exhausted.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    fn close_current(&mut self) {
        if let Some(scanner) = self.current.take() {
            self.stats.lines_read += scanner.lines_read();
            debug!(
                "Scanned {} ({} lines)",
                scanner.path().display(),
                scanner.lines_read()
            );
        }
    }
}

impl Iterator for Search<'_> {
    type Item = Result<Match, SearchError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            if let Some(scanner) = self.current.as_mut() {
                match scanner.next_match(&self.matcher) {
                    Some(Ok(found)) => {
                        self.stats.matches += 1;
                        return Some(Ok(found));
                    }
                    Some(Err(e)) => {
                        self.close_current();
                        return Some(Err(e));
                    }
                    None => self.close_current(),
                }
            }

            match self.walker.next() {
                Some(Ok(WalkEvent::File(path))) => {
                    match FileScanner::open(path, self.request.max_line_bytes) {
                        Ok(scanner) => {
                            self.stats.files_scanned += 1;
                            self.current = Some(scanner);
                        }
                        Err(e) => return Some(Err(e)),
                    }
                }
                Some(Ok(WalkEvent::Filtered(path))) => {
                    self.stats.files_filtered += 1;
                    debug!("Skipping {} (extension filter)", path.display());
                }
                Some(Err(e)) => {
                    self.finished = true;
                    return Some(Err(e));
                }
                None => {
                    self.finished = true;
                    return None;
                }
            }
        }
    }
}
