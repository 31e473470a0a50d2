use std::fs::File;
use std::io::{BufReader, Cursor, Read, Seek};
use std::path::Path;

use serde::Serialize;

use crate::chart::{Description, Tier};
use crate::error::Result;
use crate::identity;
use crate::package::decode::read_description;
use crate::package::{ArchiveSource, EntrySource, check_path};

/// Catalog summary of a package, read without decoding charts or the timeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PackageMetadata {
    pub description: Description,
    pub has_expert: bool,
    pub has_advanced: bool,
    pub has_moderate: bool,
    pub has_beginner: bool,
    pub file_length: u64,
    pub weak_hash: String,
}

impl PackageMetadata {
    pub fn read(bytes: &[u8]) -> Result<Self> {
        Self::read_from(Cursor::new(bytes), bytes.len() as u64)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        check_path(path)?;
        let file = File::open(path)?;
        let file_length = file.metadata()?.len();
        Self::read_from(BufReader::new(file), file_length)
    }

    pub fn read_from<R: Read + Seek>(reader: R, file_length: u64) -> Result<Self> {
        let mut source = ArchiveSource::open(reader)?;
        Self::from_source(&mut source, file_length)
    }

    pub fn from_source<S: EntrySource>(source: &mut S, file_length: u64) -> Result<Self> {
        let description = read_description(source)?;

        let mut has = [false; 4];
        for name in source.entry_names() {
            // entries are matched by file name, ignoring any folder
            let file_name = name.rsplit('/').next().unwrap_or(&name);
            if let Some(tier) = Tier::from_entry_name(file_name) {
                has[tier as usize] = true;
            }
        }

        let weak_hash = identity::weak_hash(&description, file_length);
        Ok(Self {
            description,
            has_beginner: has[Tier::Beginner as usize],
            has_moderate: has[Tier::Moderate as usize],
            has_advanced: has[Tier::Advanced as usize],
            has_expert: has[Tier::Expert as usize],
            file_length,
            weak_hash,
        })
    }

    pub fn has_tier(&self, tier: Tier) -> bool {
        match tier {
            Tier::Beginner => self.has_beginner,
            Tier::Moderate => self.has_moderate,
            Tier::Advanced => self.has_advanced,
            Tier::Expert => self.has_expert,
        }
    }

    pub fn song_id(&self) -> &str {
        &self.description.song_id
    }
}
