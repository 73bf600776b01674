//! Raw catalog records.
//!
//! These are the loosely-shaped records a catalog provider hands back. Every
//! field is optional: upstream layouts drift, and the search service decides
//! how each missing field degrades. Nothing outside the catalog and search
//! modules should depend on these types.
//!
//! Example search result, as serialized:
//! ```json
//! {
//!   "resultType": "song",
//!   "videoId": "dQw4w9WgXcQ",
//!   "title": "Never Gonna Give You Up",
//!   "duration": "3:33",
//!   "artists": [{"id": "UCuAXFkgsw1L7xaCfnd5JJOw", "name": "Rick Astley"}],
//!   "album": {"id": "MPREb_abc", "name": "Whenever You Need Somebody"},
//!   "thumbnails": [{"url": "https://lh3.googleusercontent.com/a=w60-h60", "width": 60, "height": 60}]
//! }
//! ```

use serde::{Deserialize, Serialize};

/// A single hit returned by a catalog search
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSearchResult {
    /// Category of the hit (song, video, album, ...)
    pub result_type: Option<String>,
    pub video_id: Option<String>,
    pub title: Option<String>,
    /// Free-form duration text, e.g. "3:33"
    pub duration: Option<String>,
    pub artists: Option<Vec<RawArtist>>,
    pub album: Option<RawAlbumRef>,
    /// Ascending resolution; the last entry is the largest
    pub thumbnails: Option<Vec<RawThumbnail>>,
}

/// Artist credit on a search hit
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct RawArtist {
    pub id: Option<String>,
    pub name: Option<String>,
}

/// Album reference embedded in a search hit
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct RawAlbumRef {
    /// Album browse id (starts with `MPRE`)
    pub id: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct RawThumbnail {
    pub url: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

/// Album details returned by an album lookup
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct RawAlbum {
    pub title: Option<String>,
    /// Ascending resolution; the last entry is the largest
    pub thumbnails: Option<Vec<RawThumbnail>>,
}

impl RawThumbnail {
    /// Thumbnail with only a URL set
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Default::default()
        }
    }
}

/// URL of the last (highest resolution) thumbnail, if there is one.
pub fn last_thumbnail_url(thumbnails: Option<&[RawThumbnail]>) -> Option<&str> {
    thumbnails?.last()?.url.as_deref()
}
