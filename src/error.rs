//! Application-wide error types.
//!
//! Library modules use specific error types via `thiserror`
//! ([`CatalogError`], [`SearchError`]), while the CLI/main uses `anyhow` for
//! convenient error propagation. [`Error`] covers the startup and serving
//! paths in between.
//!
//! ```ignore
//! use crate::error::Result;
//!
//! fn build_service(config: &Config) -> Result<SearchService> {
//!     let client = YtMusicClient::new(config.provider.client_config())?; // Catalog errors
//!     Ok(SearchService::new(Arc::new(client)))
//! }
//!
//! fn search_once(rt: &Runtime, service: &SearchService, query: &SearchQuery) -> Result<Vec<SearchResult>> {
//!     Ok(rt.block_on(service.search_songs(query))?) // Search errors
//! }
//! ```

use std::net::SocketAddr;

use crate::catalog::CatalogError;
use crate::search::SearchError;

/// Application-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level application error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Could not bind the HTTP listener
    #[error("Failed to bind {0}: {1}")]
    Bind(SocketAddr, std::io::Error),

    /// Catalog client setup or request error
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Search failed
    #[error(transparent)]
    Search(#[from] SearchError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a config error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}
