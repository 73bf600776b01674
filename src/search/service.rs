//! Search service - orchestrates catalog search and result enrichment
//!
//! For each search:
//! 1. Search the catalog
//! 2. Map every hit to a [`SearchResult`], in catalog order
//! 3. Look up each hit's album cover, one call per hit, best effort

use std::sync::Arc;

use crate::catalog::MusicCatalogProvider;
use crate::catalog::raw;

use super::adapter;
use super::domain::{SearchError, SearchQuery, SearchResult};

/// Service for searching the catalog and enriching the hits
#[derive(Clone)]
pub struct SearchService {
    provider: Arc<dyn MusicCatalogProvider>,
}

impl SearchService {
    /// Create a service over the given catalog provider
    pub fn new(provider: Arc<dyn MusicCatalogProvider>) -> Self {
        Self { provider }
    }

    /// Search and enrich.
    ///
    /// Fails with [`SearchError::NotFound`] when the catalog has no hits and
    /// with [`SearchError::Internal`] for anything else that goes wrong,
    /// including one malformed hit. Album cover lookups never fail the search.
    pub async fn search_songs(&self, query: &SearchQuery) -> Result<Vec<SearchResult>, SearchError> {
        let hits = self
            .provider
            .search(&query.query, &query.filter_type, query.limit)
            .await?;

        if hits.is_empty() {
            tracing::info!(query = %query.query, filter = %query.filter_type, "no results");
            return Err(SearchError::NotFound);
        }

        let mut results = Vec::with_capacity(hits.len());
        for hit in hits {
            let result = adapter::to_search_result(hit)?;
            let album_thumbnail_url = match adapter::lookup_album_id(result.album.id.as_deref()) {
                Some(album_id) => self.album_thumbnail(album_id).await,
                None => None,
            };
            results.push(result.with_album_thumbnail(album_thumbnail_url));
        }

        tracing::info!(
            query = %query.query,
            filter = %query.filter_type,
            count = results.len(),
            "search enriched"
        );
        Ok(results)
    }

    /// Highest resolution cover of an album, or `None` if it can't be had.
    async fn album_thumbnail(&self, album_id: &str) -> Option<String> {
        match self.provider.get_album(album_id).await {
            Ok(album) => raw::last_thumbnail_url(album.thumbnails.as_deref()).map(str::to_string),
            Err(e) => {
                tracing::debug!(album_id, error = %e, "album lookup failed");
                None
            }
        }
    }
}
