use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value as JsonValue};

use crate::chart::json_body;
use crate::config::entries;
use crate::error::{Error, Result};

/// Song metadata read from `song.desc`.
///
/// The path fields name other entries of the package; an empty path means the
/// entry is not present. Keys this type does not model are kept in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Description {
    #[serde(rename = "songID", deserialize_with = "null_as_default")]
    pub song_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub mogg_song: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub artist: String,
    #[serde(deserialize_with = "null_as_default")]
    pub author: String,
    #[serde(deserialize_with = "null_as_default")]
    pub midi_file: String,
    #[serde(deserialize_with = "null_as_default")]
    pub sustain_song_right: String,
    #[serde(deserialize_with = "null_as_default")]
    pub sustain_song_left: String,
    #[serde(deserialize_with = "null_as_default")]
    pub fx_song: String,
    pub tempo: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub song_end_event: String,
    pub preroll_seconds: f64,
    pub preview_start_seconds: f64,
    pub use_midi_for_cues: bool,
    pub hidden: bool,
    pub offset: f64,
    #[serde(flatten)]
    pub extra: Map<String, JsonValue>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Description {
    /// Parse and validate a descriptor. The song identifier must be non-empty.
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        let description: Self = serde_json::from_slice(json_body(bytes))
            .map_err(|e| Error::malformed(entries::DESCRIPTION, e))?;

        if description.song_id.trim().is_empty() {
            return Err(Error::malformed(entries::DESCRIPTION, "songID is empty"));
        }

        Ok(description)
    }

    pub fn to_json(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec_pretty(self)?)
    }

    pub fn has_sustain_left(&self) -> bool {
        !self.sustain_song_left.is_empty()
    }

    pub fn has_sustain_right(&self) -> bool {
        !self.sustain_song_right.is_empty()
    }

    pub fn has_midi(&self) -> bool {
        !self.midi_file.is_empty()
    }
}
