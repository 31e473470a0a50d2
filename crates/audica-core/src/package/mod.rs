//! Song package (`.audica`) codec.
//!
//! A package is a zip archive holding:
//! - `song.desc` - the JSON descriptor (mandatory)
//! - `beginner.cues` .. `expert.cues` - one JSON chart per tier
//! - the tick-timeline MIDI file named by `midiFile`
//! - `.moggsong` descriptors and `.mogg` audio payloads named by the descriptor
//! - `song.png` - cover image
//!
//! Everything except the descriptor is optional.

mod decode;
mod encode;
mod metadata;
mod source;

pub use metadata::*;
pub use source::*;

use std::fs;
use std::path::Path;

use crate::audio::AudioLinks;
use crate::chart::{Charts, Description};
use crate::config::{RatingWeights, entries};
use crate::error::{Error, Result};
use crate::identity;
use crate::rating::{self, PackageRatings};
use crate::tempo::TempoTimeline;

/// A fully decoded song package.
///
/// Two packages compare equal when their song identity hashes match.
#[derive(Debug, Clone)]
pub struct Package {
    pub description: Description,
    pub charts: Charts,
    pub tempo: TempoTimeline,
    pub audio: AudioLinks,
    pub album_art: Option<Vec<u8>>,
}

impl Package {
    pub fn new(description: Description) -> Self {
        Self {
            description,
            charts: Charts::default(),
            tempo: TempoTimeline::default(),
            audio: AudioLinks::default(),
            album_art: None,
        }
    }

    /// Open and decode a package file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        check_path(path)?;
        let bytes = fs::read(path)?;
        Self::decode(&bytes)
    }

    /// Encode and write the package to `path`, replacing any existing file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let bytes = self.encode()?;
        fs::write(path, bytes)?;
        Ok(())
    }

    /// Replace the cover image with a file's content. A missing file is ignored.
    pub fn set_album_art_from_path<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        if !path.is_file() {
            return Ok(());
        }
        self.album_art = Some(fs::read(path)?);
        Ok(())
    }

    pub fn song_id(&self) -> &str {
        &self.description.song_id
    }

    /// `{songID}_{md5}` over all charts and the tempo map.
    pub fn identity_hash(&self) -> String {
        identity::song_identity_hash(self)
    }

    pub fn weak_hash(&self, file_length: u64) -> String {
        identity::weak_hash(&self.description, file_length)
    }

    pub fn ratings(&self, weights: &RatingWeights) -> PackageRatings {
        rating::rate_package(self, weights)
    }

    /// Fails with `DecodeIncomplete` unless the primary audio resolves.
    pub fn require_playable(&self) -> Result<()> {
        self.audio.require_primary().map(|_| ())
    }
}

impl PartialEq for Package {
    fn eq(&self, other: &Self) -> bool {
        self.identity_hash() == other.identity_hash()
    }
}

impl Eq for Package {}

/// Reject paths that do not point at an existing `.audica` file.
pub fn check_path(path: &Path) -> Result<()> {
    if !path.is_file() {
        return Err(Error::InvalidInput(format!(
            "package path doesn't exist: {}",
            path.display()
        )));
    }

    let is_package = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(entries::PACKAGE_EXTENSION));
    if !is_package {
        return Err(Error::InvalidInput(format!(
            "path doesn't lead to an .{} file: {}",
            entries::PACKAGE_EXTENSION,
            path.display()
        )));
    }

    Ok(())
}
