//! Command-line interface for ytmusic-search.
//!
//! Serves the HTTP API by default; `search` runs the same pipeline once and
//! prints the results.

mod commands;

pub use commands::{Cli, Commands, run_command};
