//! YouTube Music integration
//!
//! Anonymous access to the InnerTube API behind music.youtube.com, limited to
//! searching and album lookups.

pub mod filters;
mod client;
mod parser;

pub use client::{DEFAULT_BASE_URL, YtMusicClient, YtMusicConfig};
