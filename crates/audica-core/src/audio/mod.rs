//! Audio references of a song package.
//!
//! The descriptor names a `.moggsong` entry per mix (primary, left and right
//! sustain). Each `.moggsong` is a small s-expression text file whose
//! `(mogg_path "...")` form names the `.mogg` audio payload. The payload itself
//! is carried as opaque bytes.

mod moggsong;

pub use moggsong::*;

use tracing::{debug, warn};

use crate::chart::Description;
use crate::error::{Error, Result};
use crate::package::EntrySource;

/// A `.moggsong` entry and the audio payload it links to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioReference {
    /// Entry name of the `.moggsong` descriptor.
    pub path: String,
    /// Raw `.moggsong` bytes.
    pub descriptor: Vec<u8>,
    /// Entry name of the audio payload, empty if the descriptor names none.
    pub mogg_path: String,
    /// Audio payload bytes, `None` when `mogg_path` does not resolve.
    pub payload: Option<Vec<u8>>,
}

impl AudioReference {
    pub fn new(path: impl Into<String>, descriptor: Vec<u8>, payload: Option<Vec<u8>>) -> Self {
        let mogg_path = mogg_path_of(&String::from_utf8_lossy(&descriptor)).unwrap_or_default();
        Self {
            path: path.into(),
            descriptor,
            mogg_path,
            payload,
        }
    }

    /// True when the audio payload is present.
    pub fn is_resolved(&self) -> bool {
        self.payload.is_some()
    }
}

/// Which mix an audio reference belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioRole {
    Primary,
    SustainLeft,
    SustainRight,
}

impl std::fmt::Display for AudioRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Primary => "primary",
            Self::SustainLeft => "left sustain",
            Self::SustainRight => "right sustain",
        };
        write!(f, "{}", name)
    }
}

/// All audio references of a package.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AudioLinks {
    pub primary: Option<AudioReference>,
    pub sustain_left: Option<AudioReference>,
    pub sustain_right: Option<AudioReference>,
}

impl AudioLinks {
    pub fn get(&self, role: AudioRole) -> Option<&AudioReference> {
        match role {
            AudioRole::Primary => self.primary.as_ref(),
            AudioRole::SustainLeft => self.sustain_left.as_ref(),
            AudioRole::SustainRight => self.sustain_right.as_ref(),
        }
    }

    /// Present references in write order: primary, left, right.
    pub fn present(&self) -> impl Iterator<Item = (AudioRole, &AudioReference)> {
        [
            AudioRole::Primary,
            AudioRole::SustainLeft,
            AudioRole::SustainRight,
        ]
        .into_iter()
        .filter_map(|role| self.get(role).map(|r| (role, r)))
    }

    /// The primary reference, which a playable package must resolve.
    pub fn require_primary(&self) -> Result<&AudioReference> {
        let reference = self.primary.as_ref().ok_or_else(|| {
            Error::DecodeIncomplete("primary audio reference is missing".to_string())
        })?;

        if !reference.is_resolved() {
            return Err(Error::DecodeIncomplete(format!(
                "{} names audio '{}' which is not in the package",
                reference.path, reference.mogg_path
            )));
        }

        Ok(reference)
    }
}

/// Resolve the descriptor's audio paths against the package entries.
///
/// Unresolvable links become `None`; only read and parse failures are errors.
pub fn resolve_audio<S: EntrySource>(description: &Description, source: &mut S) -> Result<AudioLinks> {
    Ok(AudioLinks {
        primary: resolve_reference(AudioRole::Primary, &description.mogg_song, source)?,
        sustain_left: resolve_reference(
            AudioRole::SustainLeft,
            &description.sustain_song_left,
            source,
        )?,
        sustain_right: resolve_reference(
            AudioRole::SustainRight,
            &description.sustain_song_right,
            source,
        )?,
    })
}

fn resolve_reference<S: EntrySource>(
    role: AudioRole,
    path: &str,
    source: &mut S,
) -> Result<Option<AudioReference>> {
    if path.is_empty() {
        return Ok(None);
    }

    let Some(descriptor) = source.read_entry(path)? else {
        warn!("{} audio descriptor '{}' is not in the package", role, path);
        return Ok(None);
    };

    let mut reference = AudioReference::new(path, descriptor, None);
    if reference.mogg_path.is_empty() {
        warn!("{} audio descriptor '{}' names no mogg_path", role, path);
        return Ok(Some(reference));
    }

    reference.payload = source.read_entry(&reference.mogg_path)?;
    match &reference.payload {
        Some(payload) => debug!(
            "Resolved {} audio {} -> {} ({} bytes)",
            role,
            path,
            reference.mogg_path,
            payload.len()
        ),
        None => warn!(
            "{} audio '{}' named by {} is not in the package",
            role, reference.mogg_path, path
        ),
    }

    Ok(Some(reference))
}
