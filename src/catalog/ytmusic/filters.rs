//! Search filter categories and their InnerTube `params` tokens.

use crate::catalog::error::CatalogError;

const FILTERED_PREFIX: &str = "EgWKAQ";
const SPELLING_SUFFIX: &str = "AWoMEA4QChADEAQQCRAF";

/// Encode a filter name into the opaque `params` token sent with a search.
///
/// An empty filter means an unfiltered search and yields `None`.
pub fn search_params(filter: &str) -> Result<Option<String>, CatalogError> {
    let category = match filter {
        "" => return Ok(None),
        "playlists" => return Ok(Some("Eg-KAQwIABAAGAAgACgBMABqChAEEAMQCRAFEAo%3D".to_string())),
        "featured_playlists" => return Ok(Some("EgeKAQQoADgBagwQDhAKEAMQBBAJEAU%3D".to_string())),
        "community_playlists" => return Ok(Some("EgeKAQQoAEABagwQDhAKEAMQBBAJEAU%3D".to_string())),
        "songs" => "II",
        "videos" => "IQ",
        "albums" => "IY",
        "artists" => "Ig",
        "profiles" => "JY",
        "podcasts" => "JQ",
        "episodes" => "JI",
        other => return Err(CatalogError::UnknownFilter(other.to_string())),
    };

    Ok(Some(format!("{FILTERED_PREFIX}{category}{SPELLING_SUFFIX}")))
}

/// Singular result type tagged onto hits from a filtered search.
pub fn result_type(filter: &str) -> Option<String> {
    match filter {
        "" => None,
        "community_playlists" | "featured_playlists" => Some("playlist".to_string()),
        other => Some(other.strip_suffix('s').unwrap_or(other).to_string()),
    }
}
