//! JSON Lines output formatter

use std::io::{self, Write};

use term_core::Match;

pub fn write_json(out: &mut impl Write, found: &Match) -> io::Result<()> {
    let mut line = serde_json::to_vec(found)?;
    line.push(b'\n');
    out.write_all(&line)
}
