//! The catalog provider seam.
//!
//! The search service only ever talks to a [`MusicCatalogProvider`]. The
//! production binary injects a [`YtMusicClient`](super::ytmusic::YtMusicClient);
//! tests substitute the stubs in [`mocks`].

use async_trait::async_trait;

use super::error::CatalogError;
use super::raw::{RawAlbum, RawSearchResult};

/// An external music catalog that can be searched and browsed by album.
#[async_trait]
pub trait MusicCatalogProvider: Send + Sync {
    /// Search the catalog.
    ///
    /// `filter` is a provider-defined category (songs, videos, albums, ...).
    /// `limit` is the maximum number of hits wanted.
    async fn search(
        &self,
        query: &str,
        filter: &str,
        limit: i64,
    ) -> Result<Vec<RawSearchResult>, CatalogError>;

    /// Fetch album details by album id.
    async fn get_album(&self, album_id: &str) -> Result<RawAlbum, CatalogError>;
}

#[async_trait]
impl MusicCatalogProvider for super::ytmusic::YtMusicClient {
    async fn search(
        &self,
        query: &str,
        filter: &str,
        limit: i64,
    ) -> Result<Vec<RawSearchResult>, CatalogError> {
        self.search(query, filter, limit).await
    }

    async fn get_album(&self, album_id: &str) -> Result<RawAlbum, CatalogError> {
        self.get_album(album_id).await
    }
}
