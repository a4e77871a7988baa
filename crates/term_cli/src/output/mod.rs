//! Output formatting module

mod json;
mod text;

use std::io::{self, Write};

use term_core::Match;

use crate::cli::OutputFormat;

/// Writes matches to a sink as they are found.
pub struct MatchWriter<W: Write> {
    out: W,
    format: OutputFormat,
}

impl<W: Write> MatchWriter<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self { out, format }
    }

    /// Writes one match and flushes it.
    pub fn write(&mut self, found: &Match) -> io::Result<()> {
        match self.format {
            OutputFormat::Text => text::write_text(&mut self.out, found)?,
            OutputFormat::Json => json::write_json(&mut self.out, found)?,
        }
        self.out.flush()
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}
