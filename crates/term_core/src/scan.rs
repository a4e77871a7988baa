//! Per-file line scanner.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

use crate::error::{ScanErrorKind, SearchError};
use crate::matcher::Matcher;
use crate::search::Match;

/// Scans one open file line by line.
///
/// The scanner owns the file handle; dropping it closes the file.
pub struct FileScanner {
    path: PathBuf,
    reader: BufReader<File>,
    buf: Vec<u8>,
    line: u64,
    max_line_bytes: Option<usize>,
}

impl FileScanner {
    /// Opens `path` for scanning.
    pub fn open(path: PathBuf, max_line_bytes: Option<usize>) -> Result<Self, SearchError> {
        let file = match File::open(&path) {
            Ok(file) => file,
            Err(source) => return Err(SearchError::FileOpen { path, source }),
        };

        Ok(Self {
            path,
            reader: BufReader::new(file),
            buf: Vec::new(),
            line: 0,
            max_line_bytes,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of lines read so far.
    pub fn lines_read(&self) -> u64 {
        self.line
    }

    /// Advances to the next matching line.
    ///
    /// Returns `None` at end of file. After an error the scanner must be
    /// discarded.
    pub fn next_match(&mut self, matcher: &Matcher) -> Option<Result<Match, SearchError>> {
        loop {
            match self.read_line() {
                Ok(true) => {
                    if matcher.is_match(&self.buf) {
                        return Some(Ok(Match::new(self.path.clone(), self.line)));
                    }
                }
                Ok(false) => return None,
                Err(kind) => {
                    return Some(Err(SearchError::Scan {
                        path: self.path.clone(),
                        line: self.line,
                        kind,
                    }));
                }
            }
        }
    }

    /// Reads the next line into `buf` without its terminator.
    fn read_line(&mut self) -> Result<bool, ScanErrorKind> {
        self.buf.clear();
        self.line += 1;

        let read = match self.max_line_bytes {
            // Room for the content plus "\r\n"; anything longer is over the limit.
            Some(limit) => {
                let cap = u64::try_from(limit).unwrap_or(u64::MAX).saturating_add(2);
                read_until_newline(&mut (&mut self.reader).take(cap), &mut self.buf)?
            }
            None => read_until_newline(&mut self.reader, &mut self.buf)?,
        };

        if read == 0 {
            self.line -= 1;
            return Ok(false);
        }

        if self.buf.last() == Some(&b'\n') {
            self.buf.pop();
        }
        if self.buf.last() == Some(&b'\r') {
            self.buf.pop();
        }

        if let Some(limit) = self.max_line_bytes
            && self.buf.len() > limit
        {
            return Err(ScanErrorKind::LineTooLong { limit });
        }

        Ok(true)
    }
}

fn read_until_newline<R: BufRead>(reader: &mut R, buf: &mut Vec<u8>) -> io::Result<usize> {
    loop {
        match reader.read_until(b'\n', buf) {
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            other => return other,
        }
    }
}
