//! InnerTube response parsing.
//!
//! This is the ONLY place that knows the shape of music.youtube.com JSON.
//! Everything is read through JSON pointers and anything missing degrades to
//! `None`; only a response with no recognizable top-level layout is an error.

use serde_json::Value;

use crate::catalog::error::CatalogError;
use crate::catalog::raw::{RawAlbum, RawAlbumRef, RawArtist, RawSearchResult, RawThumbnail};

const TABBED_SECTIONS: &str =
    "/contents/tabbedSearchResultsRenderer/tabs/0/tabRenderer/content/sectionListRenderer/contents";
const PLAIN_SECTIONS: &str = "/contents/sectionListRenderer/contents";

const ALBUM_RESPONSIVE_HEADER: &str = "/contents/twoColumnBrowseResultsRenderer/tabs/0/tabRenderer/content/sectionListRenderer/contents/0/musicResponsiveHeaderRenderer";
const ALBUM_DETAIL_HEADER: &str = "/header/musicDetailHeaderRenderer";

const PAGE_TYPE: &str =
    "/navigationEndpoint/browseEndpoint/browseEndpointContextSupportedConfigs/browseEndpointContextMusicConfig/pageType";
const BROWSE_ID: &str = "/navigationEndpoint/browseEndpoint/browseId";
const NEXT_CONTINUATION: &str = "/continuations/0/nextContinuationData/continuation";

/// Category labels leading the detail runs of unfiltered hits and of album,
/// artist and playlist rows.
const TYPE_LABELS: &[&str] = &[
    "Song", "Video", "Album", "Single", "EP", "Artist", "Playlist", "Episode", "Podcast",
    "Profile", "Station",
];

/// One page of search hits
#[derive(Debug, Default)]
pub struct SearchPage {
    pub results: Vec<RawSearchResult>,
    /// Token for the next page, absent on the last one
    pub continuation: Option<String>,
}

/// Parse a `search` response into raw results, in shelf order.
pub fn parse_search_response(
    response: &Value,
    result_type: Option<&str>,
) -> Result<SearchPage, CatalogError> {
    if response.get("contents").is_none() {
        return Ok(SearchPage::default());
    }

    let sections = response
        .pointer(TABBED_SECTIONS)
        .or_else(|| response.pointer(PLAIN_SECTIONS))
        .and_then(Value::as_array)
        .ok_or_else(|| CatalogError::UnexpectedLayout("no search sections".to_string()))?;

    let shelves: Vec<&Value> = sections
        .iter()
        .filter_map(|section| section.get("musicShelfRenderer"))
        .collect();

    Ok(SearchPage {
        results: shelves
            .iter()
            .flat_map(|shelf| parse_shelf_items(shelf, result_type))
            .collect(),
        continuation: shelves.last().and_then(|shelf| text_at(shelf, NEXT_CONTINUATION)),
    })
}

/// Parse a follow-up `search` page requested with a continuation token.
///
/// A reply without a shelf continuation is treated as the end of the results.
pub fn parse_continuation_response(response: &Value, result_type: Option<&str>) -> SearchPage {
    let Some(shelf) = response.pointer("/continuationContents/musicShelfContinuation") else {
        return SearchPage::default();
    };

    SearchPage {
        results: parse_shelf_items(shelf, result_type),
        continuation: text_at(shelf, NEXT_CONTINUATION),
    }
}

fn parse_shelf_items(shelf: &Value, result_type: Option<&str>) -> Vec<RawSearchResult> {
    shelf
        .get("contents")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.get("musicResponsiveListItemRenderer"))
                .map(|renderer| parse_list_item(renderer, result_type))
                .collect()
        })
        .unwrap_or_default()
}

/// Parse a `browse` response for an album page.
pub fn parse_album_response(response: &Value) -> Result<RawAlbum, CatalogError> {
    if let Some(header) = response.pointer(ALBUM_RESPONSIVE_HEADER) {
        return Ok(RawAlbum {
            title: text_at(header, "/title/runs/0/text"),
            thumbnails: thumbnails_at(header, "/thumbnail/musicThumbnailRenderer/thumbnail/thumbnails"),
        });
    }

    if let Some(header) = response.pointer(ALBUM_DETAIL_HEADER) {
        return Ok(RawAlbum {
            title: text_at(header, "/title/runs/0/text"),
            thumbnails: thumbnails_at(
                header,
                "/thumbnail/croppedSquareThumbnailRenderer/thumbnail/thumbnails",
            ),
        });
    }

    Err(CatalogError::UnexpectedLayout("no album header".to_string()))
}

fn parse_list_item(renderer: &Value, result_type: Option<&str>) -> RawSearchResult {
    let title = text_at(
        renderer,
        "/flexColumns/0/musicResponsiveListItemFlexColumnRenderer/text/runs/0/text",
    );

    let video_id = text_at(
        renderer,
        "/overlay/musicItemThumbnailOverlayRenderer/content/musicPlayButtonRenderer/playNavigationEndpoint/watchEndpoint/videoId",
    )
    .or_else(|| text_at(renderer, "/playlistItemData/videoId"));

    let runs = renderer
        .pointer("/flexColumns/1/musicResponsiveListItemFlexColumnRenderer/text/runs")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();
    let details = parse_detail_runs(runs, result_type);
    let result_type = result_type
        .map(str::to_string)
        .or_else(|| details.label.as_deref().map(label_result_type));

    // Album hits link to their own browse page rather than carrying an album run
    let album = details.album.or_else(|| {
        text_at(renderer, BROWSE_ID)
            .filter(|id| id.starts_with("MPRE"))
            .map(|id| RawAlbumRef {
                id: Some(id),
                name: title.clone(),
            })
    });

    RawSearchResult {
        result_type,
        video_id,
        title,
        duration: details.duration,
        artists: (!details.artists.is_empty()).then_some(details.artists),
        album,
        thumbnails: thumbnails_at(renderer, "/thumbnail/musicThumbnailRenderer/thumbnail/thumbnails"),
    }
}

#[derive(Default)]
struct DetailRuns {
    label: Option<String>,
    artists: Vec<RawArtist>,
    album: Option<RawAlbumRef>,
    duration: Option<String>,
}

/// Classify the "Artist • Album • 3:33" runs of the second flex column.
///
/// Even runs carry content, odd runs are separators. Rows that may open with
/// a category label ("Song • Artist • ...") have it split off first.
fn parse_detail_runs(runs: &[Value], result_type: Option<&str>) -> DetailRuns {
    let mut details = DetailRuns::default();
    let mut start = 0;

    if matches!(result_type, None | Some("album" | "artist" | "playlist"))
        && let Some(first) = runs.first()
        && first.get("navigationEndpoint").is_none()
        && let Some(text) = first.get("text").and_then(Value::as_str)
        && TYPE_LABELS.contains(&text)
    {
        details.label = Some(text.to_string());
        start = 2;
    }

    for (index, run) in runs.iter().enumerate().skip(start).step_by(2) {
        let Some(text) = run.get("text").and_then(Value::as_str) else {
            continue;
        };

        if run.get("navigationEndpoint").is_some() {
            let browse_id = text_at(run, BROWSE_ID);
            let page_type = run.pointer(PAGE_TYPE).and_then(Value::as_str);
            let is_album = page_type == Some("MUSIC_PAGE_TYPE_ALBUM")
                || browse_id.as_deref().is_some_and(|id| id.starts_with("MPRE"));

            if is_album {
                details.album = Some(RawAlbumRef {
                    id: browse_id,
                    name: Some(text.to_string()),
                });
            } else {
                details.artists.push(RawArtist {
                    id: browse_id,
                    name: Some(text.to_string()),
                });
            }
        } else if is_duration(text) {
            details.duration = Some(text.to_string());
        } else if is_year(text) || (index > 0 && is_view_count(text)) {
            continue;
        } else {
            details.artists.push(RawArtist {
                id: None,
                name: Some(text.to_string()),
            });
        }
    }

    details
}

/// "Single" and "EP" rows are albums
fn label_result_type(label: &str) -> String {
    match label {
        "Single" | "EP" => "album".to_string(),
        other => other.to_lowercase(),
    }
}

fn text_at(value: &Value, pointer: &str) -> Option<String> {
    value.pointer(pointer).and_then(Value::as_str).map(str::to_string)
}

fn thumbnails_at(value: &Value, pointer: &str) -> Option<Vec<RawThumbnail>> {
    let thumbnails = value.pointer(pointer)?;
    serde_json::from_value(thumbnails.clone()).ok()
}

/// "3:33", "1:02:03"
fn is_duration(text: &str) -> bool {
    let parts: Vec<&str> = text.split(':').collect();
    parts.len() >= 2
        && parts
            .iter()
            .all(|p| !p.is_empty() && p.chars().all(|c| c.is_ascii_digit()))
}

fn is_year(text: &str) -> bool {
    text.len() == 4 && text.chars().all(|c| c.is_ascii_digit())
}

/// "1.2M views", "532K plays"
fn is_view_count(text: &str) -> bool {
    let mut words = text.split(' ');
    match (words.next(), words.next(), words.next()) {
        (Some(count), Some(_), None) => count.starts_with(|c: char| c.is_ascii_digit()),
        _ => false,
    }
}
