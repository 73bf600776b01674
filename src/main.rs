//! ytmusic-search - a small HTTP API for searching YouTube Music.
//!
//! Searches are delegated to YouTube Music and every hit is reshaped into a
//! fixed schema: watch and album URLs are derived, the largest song thumbnail
//! is picked, and the album cover is looked up on a best-effort basis. The
//! same pipeline is available as a one-shot `search` CLI command.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod search;
pub mod server;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive("ytmusic_search=info".parse()?))
        .init();

    cli::run_command(&args)
}
