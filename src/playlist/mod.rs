pub mod entities;
pub mod fetcher;
pub mod responses;

pub use entities::{join_artist_names, Playlist, TrackSummary, UNKNOWN_ARTIST};
pub use fetcher::{parse_tracks, FetcherBuilder, PlaylistFetcher, SPOTIFY_API_URL};
