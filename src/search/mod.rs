//! Search enrichment - turns catalog hits into the public result schema.
//!
//! - **Domain models** (`domain.rs`) - request, response and error types
//! - **Adapter** (`adapter.rs`) - raw catalog record to [`SearchResult`], with URL derivation
//! - **Service** (`service.rs`) - search, map, and best-effort album cover lookup
//!
//! # Usage
//!
//! ```ignore
//! use ytmusic_search::search::{SearchQuery, SearchService};
//!
//! let service = SearchService::new(Arc::new(client));
//! let results = service.search_songs(&SearchQuery::new("example song")).await?;
//! println!("{}", results[0].music_service_url);
//! ```

pub mod adapter;
pub mod domain;
pub mod service;

pub use domain::{
    AlbumSummary, DEFAULT_FILTER_TYPE, DEFAULT_LIMIT, NOT_AVAILABLE, SearchError, SearchQuery,
    SearchResult,
};
pub use service::SearchService;
