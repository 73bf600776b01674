//! Errors raised by catalog providers.

/// Errors that can occur while talking to a music catalog
#[derive(Debug, Clone, thiserror::Error)]
pub enum CatalogError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API request failed with HTTP {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Rate limited - try again later")]
    RateLimited,

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("Invalid filter type \"{0}\"")]
    UnknownFilter(String),

    #[error("Invalid album browse id \"{0}\"")]
    InvalidAlbumId(String),

    #[error("Unexpected response layout: {0}")]
    UnexpectedLayout(String),

    #[error("Malformed search result: {0}")]
    MalformedResult(String),
}

impl From<reqwest::Error> for CatalogError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            Self::Parse(e.to_string())
        } else {
            Self::Network(e.to_string())
        }
    }
}
