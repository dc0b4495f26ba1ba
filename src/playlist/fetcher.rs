use std::time::Duration;

use log::{debug, error, warn};
use reqwest::blocking::Client;
use serde_json::Value;
use url::Url;

use super::entities::{join_artist_names, Playlist, TrackSummary};
use super::responses::{PagingResponse, PlaylistTrackItemResponse, TrackResponse};
use crate::error::{FetchError, Result};

pub static SPOTIFY_API_URL: &str = "https://api.spotify.com/v1";

/// Reads playlists and playlist tracks for whoever owns the bearer token.
///
/// Every call is a single blocking round trip. Clones share the underlying
/// connection pool.
#[derive(Debug, Clone)]
pub struct PlaylistFetcher {
    client: Client,
    base_url: Url,
}

#[derive(Debug, Default)]
pub struct FetcherBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    client: Option<Client>,
}

impl FetcherBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn base_url(mut self, base_url: &str) -> Self {
        self.base_url = Some(base_url.to_owned());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = Some(user_agent.to_owned());
        self
    }

    /// Use a preconfigured client. `timeout` and `user_agent` are then ignored.
    pub fn client(mut self, client: Client) -> Self {
        self.client = Some(client);
        self
    }

    pub fn build(self) -> Result<PlaylistFetcher> {
        let base_url = Url::parse(self.base_url.as_deref().unwrap_or(SPOTIFY_API_URL))?;
        if base_url.cannot_be_a_base() {
            return Err(FetchError::Config(format!(
                "{base_url} cannot be used as a base URL"
            )));
        }

        let client = match self.client {
            Some(client) => {
                if self.timeout.is_some() || self.user_agent.is_some() {
                    warn!("Ignoring timeout/user agent settings for a preconfigured client");
                }
                client
            }
            None => {
                let mut builder = Client::builder();
                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }
                if let Some(user_agent) = self.user_agent {
                    builder = builder.user_agent(user_agent);
                }
                builder.build()?
            }
        };

        debug!("Playlist fetcher targeting {base_url}");
        Ok(PlaylistFetcher { client, base_url })
    }
}

impl PlaylistFetcher {
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    pub fn builder() -> FetcherBuilder {
        FetcherBuilder::new()
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Playlists of the current user, first page only.
    ///
    /// Any failure is logged and reported as an empty list, use
    /// [`try_get_playlists`](Self::try_get_playlists) to tell the two apart.
    pub fn get_playlists(&self, access_token: &str) -> Vec<Playlist> {
        self.try_get_playlists(access_token).unwrap_or_else(|e| {
            error!("Error fetching playlists: {e}");
            Vec::new()
        })
    }

    pub fn try_get_playlists(&self, access_token: &str) -> Result<Vec<Playlist>> {
        let url = self.endpoint(&["me", "playlists"])?;
        let raw = self.get_json(url, access_token)?;

        let page = PagingResponse::from_value(Some(raw));
        if let Some(next) = &page.next {
            debug!("Not following further playlist pages ({next})");
        }

        let playlists = page
            .items
            .into_iter()
            .filter_map(|item| match Playlist::try_from(item) {
                Ok(playlist) => Some(playlist),
                Err(other) => {
                    debug!("Skipping playlist entry that is not an object: {other}");
                    None
                }
            })
            .collect();
        Ok(playlists)
    }

    /// Tracks of one playlist as name/artist pairs, first page only.
    ///
    /// Same failure policy as [`get_playlists`](Self::get_playlists).
    pub fn get_playlist_tracks(&self, playlist_id: &str, access_token: &str) -> Vec<TrackSummary> {
        self.try_get_playlist_tracks(playlist_id, access_token)
            .unwrap_or_else(|e| {
                error!("Error fetching playlist tracks: {e}");
                Vec::new()
            })
    }

    pub fn try_get_playlist_tracks(
        &self,
        playlist_id: &str,
        access_token: &str,
    ) -> Result<Vec<TrackSummary>> {
        let url = self.endpoint(&["playlists", playlist_id, "tracks"])?;
        let raw = self.get_json(url, access_token)?;
        Ok(parse_tracks(Some(raw)))
    }

    // Segments are percent-encoded, so an id can never escape its own segment.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                FetchError::Config(format!("{} cannot be used as a base URL", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn get_json(&self, url: Url, access_token: &str) -> Result<Value> {
        debug!("GET {url}");
        let response = self.client.get(url).bearer_auth(access_token).send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(FetchError::Status { status, body });
        }

        let response_text = response.text()?;
        Ok(serde_json::from_str(&response_text)?)
    }
}

/// Flattens a playlist-tracks response into name/artist pairs.
///
/// A missing or malformed envelope gives an empty list. Entries without a
/// track (removed or unavailable items) are skipped, order is kept.
pub fn parse_tracks(raw: Option<Value>) -> Vec<TrackSummary> {
    PagingResponse::from_value(raw)
        .items
        .into_iter()
        .filter_map(parse_track_item)
        .collect()
}

fn parse_track_item(item: Value) -> Option<TrackSummary> {
    let item: PlaylistTrackItemResponse = serde_json::from_value(item).ok()?;
    let track: TrackResponse = match serde_json::from_value(item.track?) {
        Ok(track) => track,
        Err(e) => {
            debug!("Skipping malformed track entry: {e}");
            return None;
        }
    };

    Some(TrackSummary {
        artist: join_artist_names(track.artist_names()),
        name: track.name(),
    })
}
