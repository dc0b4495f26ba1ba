
// https://developer.spotify.com/documentation/web-api/reference/get-a-list-of-current-users-playlists
// https://developer.spotify.com/documentation/web-api/reference/get-playlists-tracks

use serde::Deserialize;
use serde_json::Value;

// Fields are optional throughout: missing pieces collapse to "nothing to
// report" instead of a decode error.

#[derive(Debug, Deserialize)]
pub struct ArtistResponse {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TrackResponse {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub artists: Option<Vec<Value>>,
}

impl TrackResponse {
    /// The track name, empty when it is missing or not a string.
    pub fn name(&self) -> String {
        self.name
            .as_ref()
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_owned()
    }

    /// Names of the artists that carry one, in listing order.
    pub fn artist_names(&self) -> impl Iterator<Item = String> + '_ {
        self.artists
            .iter()
            .flatten()
            .filter_map(|artist| ArtistResponse::deserialize(artist).ok())
            .filter_map(|artist| artist.name)
    }
}

#[derive(Debug, Deserialize)]
pub struct PlaylistTrackItemResponse {
    #[serde(default)]
    pub track: Option<Value>,
}

/// Paging envelope shared by both endpoints. `items` stays raw so a single
/// odd entry never discards the whole page.
#[derive(Debug, Default)]
pub struct PagingResponse {
    pub items: Vec<Value>,
    pub next: Option<String>,
}

impl PagingResponse {
    /// Only a top-level `items` array counts. Every other field is read on its
    /// own, so an odd `next` never costs the page.
    pub fn from_value(raw: Option<Value>) -> Self {
        let Some(Value::Object(mut envelope)) = raw else {
            return PagingResponse::default();
        };

        let items = match envelope.remove("items") {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        };
        let next = match envelope.remove("next") {
            Some(Value::String(next)) => Some(next),
            _ => None,
        };
        PagingResponse { items, next }
    }
}
