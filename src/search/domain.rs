//! Search request and response models.
//!
//! These types are OUR types - they define the public response schema and
//! don't change when the catalog's layout changes.

use serde::{Deserialize, Serialize};

use crate::catalog::CatalogError;

/// Placeholder for any field the catalog did not supply
pub const NOT_AVAILABLE: &str = "N/A";

pub const DEFAULT_FILTER_TYPE: &str = "songs";
pub const DEFAULT_LIMIT: i64 = 5;

/// Parameters of a search
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchQuery {
    pub query: String,
    #[serde(default = "default_filter_type")]
    pub filter_type: String,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_filter_type() -> String {
    DEFAULT_FILTER_TYPE.to_string()
}

fn default_limit() -> i64 {
    DEFAULT_LIMIT
}

impl SearchQuery {
    /// A query with the default filter and limit
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            filter_type: default_filter_type(),
            limit: DEFAULT_LIMIT,
        }
    }
}

/// One enriched search hit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub title: String,
    /// Upstream duration text, passed through as-is
    #[serde(rename = "duration")]
    pub duration_text: String,
    pub video_id: String,
    /// Never empty; `["N/A"]` when no artist is credited
    pub artists: Vec<String>,
    pub album: AlbumSummary,
    #[serde(rename = "youtube_music_url")]
    pub music_service_url: String,
    #[serde(rename = "youtube_video_url")]
    pub video_service_url: String,
    /// Highest resolution song thumbnail
    #[serde(rename = "song_thumbnail_url")]
    pub thumbnail_url: String,
    /// Highest resolution album cover, when the album lookup succeeded
    pub album_thumbnail_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlbumSummary {
    pub name: String,
    pub id: Option<String>,
    /// Album page URL, derived from `id`
    pub url: String,
}

impl SearchResult {
    /// Attach the album cover found by a secondary lookup.
    pub fn with_album_thumbnail(self, album_thumbnail_url: Option<String>) -> Self {
        Self {
            album_thumbnail_url,
            ..self
        }
    }
}

/// Errors surfaced to search callers
///
/// Deliberately coarse: anything other than an empty result set is `Internal`,
/// carrying the underlying error text.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SearchError {
    #[error("No results found")]
    NotFound,

    #[error("{0}")]
    Internal(String),
}

impl From<CatalogError> for SearchError {
    fn from(e: CatalogError) -> Self {
        Self::Internal(e.to_string())
    }
}
