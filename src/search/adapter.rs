//! Adapter layer: convert raw catalog records to search results
//!
//! This is the ONLY place raw records become [`SearchResult`]s. Every field
//! degrades on its own to `"N/A"` (or `None`); the one hard failure is an
//! artist credit with no name, which aborts the whole search.

use super::domain::{AlbumSummary, NOT_AVAILABLE, SearchResult};
use crate::catalog::raw::{self, RawArtist, RawSearchResult};
use crate::catalog::CatalogError;

const ALBUM_URL_PREFIX: &str = "https://music.youtube.com/browse/";
const MUSIC_WATCH_URL_PREFIX: &str = "https://music.youtube.com/watch?v=";
const VIDEO_WATCH_URL_PREFIX: &str = "https://www.youtube.com/watch?v=";

/// Convert a raw hit into a search result without an album thumbnail.
pub fn to_search_result(raw: RawSearchResult) -> Result<SearchResult, CatalogError> {
    let artists = artist_names(raw.artists.as_deref())?;
    let video_id = raw.video_id.unwrap_or_else(not_available);

    let album = raw.album.unwrap_or_default();
    let album_url = album_url(album.id.as_deref());
    let album = AlbumSummary {
        name: album.name.unwrap_or_else(not_available),
        id: album.id,
        url: album_url,
    };

    Ok(SearchResult {
        title: raw.title.unwrap_or_else(not_available),
        duration_text: raw.duration.unwrap_or_else(not_available),
        music_service_url: watch_url(MUSIC_WATCH_URL_PREFIX, &video_id),
        video_service_url: watch_url(VIDEO_WATCH_URL_PREFIX, &video_id),
        video_id,
        artists,
        album,
        thumbnail_url: raw::last_thumbnail_url(raw.thumbnails.as_deref())
            .map_or_else(not_available, str::to_string),
        album_thumbnail_url: None,
    })
}

/// Album id worth a page URL and a cover lookup
pub fn lookup_album_id(id: Option<&str>) -> Option<&str> {
    id.filter(|id| !id.is_empty())
}

/// One name per credited artist, or `["N/A"]` when nobody is credited.
fn artist_names(artists: Option<&[RawArtist]>) -> Result<Vec<String>, CatalogError> {
    match artists {
        None | Some([]) => Ok(vec![not_available()]),
        Some(artists) => artists
            .iter()
            .map(|artist| {
                artist.name.clone().ok_or_else(|| {
                    CatalogError::MalformedResult("artist credit without a name".to_string())
                })
            })
            .collect(),
    }
}

fn album_url(album_id: Option<&str>) -> String {
    match lookup_album_id(album_id) {
        Some(id) => format!("{ALBUM_URL_PREFIX}{id}"),
        None => not_available(),
    }
}

fn watch_url(prefix: &str, video_id: &str) -> String {
    if video_id == NOT_AVAILABLE {
        not_available()
    } else {
        format!("{prefix}{video_id}")
    }
}

fn not_available() -> String {
    NOT_AVAILABLE.to_string()
}
