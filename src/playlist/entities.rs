use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const UNKNOWN_ARTIST: &str = "Unknown Artist";
const ARTIST_SEPARATOR: &str = ", ";

/// A playlist object exactly as the provider returned it.
///
/// Only the accessors below are typed; everything else is passed through
/// untouched and serializes back to the same object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Playlist(Map<String, Value>);

impl Playlist {
    pub fn id(&self) -> Option<&str> {
        self.0.get("id").and_then(Value::as_str)
    }

    pub fn name(&self) -> Option<&str> {
        self.0.get("name").and_then(Value::as_str)
    }

    /// Number of tracks, from the `tracks.total` field of the listing.
    pub fn track_total(&self) -> Option<u64> {
        self.0.get("tracks")?.get("total")?.as_u64()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl TryFrom<Value> for Playlist {
    type Error = Value;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Playlist(map)),
            other => Err(other),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackSummary {
    pub name: String,
    pub artist: String,
}

/// Joins artist names with `", "`, falling back to [`UNKNOWN_ARTIST`] when
/// there are none.
pub fn join_artist_names<I, S>(names: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut names = names.into_iter();
    let Some(first) = names.next() else {
        return UNKNOWN_ARTIST.to_string();
    };

    names.fold(first.as_ref().to_owned(), |mut joined, name| {
        joined.push_str(ARTIST_SEPARATOR);
        joined.push_str(name.as_ref());
        joined
    })
}
