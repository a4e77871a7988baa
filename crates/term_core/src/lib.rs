//! # term_core
//!
//! Recursive plain-text search.
//!
//! This crate provides:
//! - `SearchRequest`, the description of a single search
//! - A deterministic, symlink-safe file walker
//! - Line scanning with optional case folding
//! - A lazy `Search` iterator over matches
//!
//! ## Example
//!
//! ```rust,no_run
//! use term_core::{SearchRequest, search};
//!
//! let request = SearchRequest::new("src", "TODO").extension(".rs");
//! for result in search(&request)? {
//!     match result {
//!         Ok(found) => println!("{found}"),
//!         Err(e) if e.is_fatal() => return Err(e),
//!         Err(e) => eprintln!("{e}"),
//!     }
//! }
//! # Ok::<(), term_core::SearchError>(())
//! ```

mod error;
mod matcher;
mod request;
mod scan;
mod search;
pub mod walker;

pub use error::{ScanErrorKind, SearchError};
pub use matcher::{Matcher, fold_case};
pub use request::{SearchRequest, dotted_extension};
pub use scan::FileScanner;
pub use search::{Match, Search, SearchStats, search};
