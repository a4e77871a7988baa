//! Subcommand implementations

pub mod find;
