//! Reads a Spotify user's playlists and flattens playlist tracks into
//! name/artist pairs.
//!
//! The caller owns the access token; this crate only attaches it as a bearer
//! credential. Calls are blocking and hold no state between invocations.

pub mod error;
pub mod playlist;

pub use error::{FetchError, Result};
pub use playlist::{
    parse_tracks, FetcherBuilder, Playlist, PlaylistFetcher, TrackSummary, SPOTIFY_API_URL,
};
