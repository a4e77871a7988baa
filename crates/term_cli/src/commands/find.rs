//! Find command implementation

use std::io::{self, Write};
use std::path::PathBuf;

use miette::{IntoDiagnostic, Result};
use term_core::{SearchRequest, search};
use tracing::{debug, warn};

use crate::cli::FindArgs;
use crate::output::MatchWriter;

/// Builds the search request from the command-line arguments.
pub fn build_request(args: &FindArgs) -> SearchRequest {
    let mut request = SearchRequest::new(&args.path, &args.word)
        .case_insensitive(args.icase)
        .extension(args.ext.as_str());

    if let Some(limit) = args.max_line_length {
        request = request.max_line_bytes(limit);
    }

    request
}

/// Runs a search and writes every match to `out`.
///
/// Returns `Ok(true)` if some files could not be searched.
pub fn run_find(args: &FindArgs, out: impl Write) -> Result<bool> {
    let request = build_request(args);
    let mut writer = MatchWriter::new(out, args.format);

    let mut results = search(&request).into_diagnostic()?;
    let mut failures: Vec<PathBuf> = Vec::new();

    for result in results.by_ref() {
        match result {
            Ok(found) => {
                if let Err(e) = writer.write(&found) {
                    if e.kind() == io::ErrorKind::BrokenPipe {
                        debug!("Output closed, stopping search");
                        return Ok(!failures.is_empty());
                    }
                    return Err(e).into_diagnostic();
                }
            }
            Err(e) if e.is_fatal() => return Err(e).into_diagnostic(),
            Err(e) => {
                warn!("{}", e);
                if let Some(path) = e.path() {
                    failures.push(path.to_path_buf());
                }
            }
        }
    }

    let stats = results.stats();
    debug!(
        "Searched {} files ({} filtered, {} lines), found {} matches",
        stats.files_scanned, stats.files_filtered, stats.lines_read, stats.matches
    );

    if !failures.is_empty() {
        eprintln!("\n{} file(s) could not be searched:", failures.len());
        for path in &failures {
            eprintln!("  {}", path.display());
        }
    }

    Ok(!failures.is_empty())
}
