//! Music catalog access.
//!
//! # Architecture
//!
//! - **Raw records** (`raw.rs`) - what a provider hands back, every field optional
//! - **Provider trait** (`provider.rs`) - the seam the search service depends on
//! - **YouTube Music client** (`ytmusic/`) - the production provider, speaking
//!   the InnerTube web API used by music.youtube.com
//!
//! The search service never sees InnerTube JSON. The client parses responses
//! into raw records, so an upstream layout change stays inside `ytmusic/`.

pub mod error;
pub mod provider;
pub mod raw;
pub mod ytmusic;

pub use error::CatalogError;
pub use provider::MusicCatalogProvider;
pub use raw::{RawAlbum, RawAlbumRef, RawArtist, RawSearchResult, RawThumbnail};
pub use ytmusic::{YtMusicClient, YtMusicConfig};
