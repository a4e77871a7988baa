//! Text output formatter

use std::io::{self, Write};

use term_core::Match;

pub fn write_text(out: &mut impl Write, found: &Match) -> io::Result<()> {
    writeln!(out, "{}", found)
}
