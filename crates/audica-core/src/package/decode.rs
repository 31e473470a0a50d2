use std::io::{Cursor, Read, Seek};

use tracing::{debug, warn};

use crate::audio::resolve_audio;
use crate::chart::{Chart, Charts, Description, Tier};
use crate::config::entries;
use crate::error::{Error, Result};
use crate::package::{ArchiveSource, EntrySource, Package};
use crate::tempo::{TempoTimeline, midi};

impl Package {
    /// Decode a package from its archive bytes.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        Self::decode_from(Cursor::new(bytes))
    }

    pub fn decode_from<R: Read + Seek>(reader: R) -> Result<Self> {
        let mut source = ArchiveSource::open(reader)?;
        Self::decode_source(&mut source)
    }

    /// Decode from any entry source. Errors abort the whole decode.
    pub fn decode_source<S: EntrySource>(source: &mut S) -> Result<Self> {
        let description = read_description(source)?;
        let charts = read_charts(source)?;
        let tempo = read_tempo(&description, source)?;
        let audio = resolve_audio(&description, source)?;
        let album_art = source.read_entry(entries::ALBUM_ART)?;

        debug!(
            "Decoded {}: {} charts, {} tempo events, {} audio references",
            description.song_id,
            charts.count(),
            tempo.len(),
            audio.present().count()
        );

        Ok(Package {
            description,
            charts,
            tempo,
            audio,
            album_art,
        })
    }
}

pub(crate) fn read_description<S: EntrySource>(source: &mut S) -> Result<Description> {
    let bytes = source
        .read_entry(entries::DESCRIPTION)?
        .ok_or(Error::MissingDescriptor)?;
    Description::from_json(&bytes)
}

fn read_charts<S: EntrySource>(source: &mut S) -> Result<Charts> {
    let mut charts = Charts::default();
    for tier in Tier::ALL {
        if let Some(bytes) = source.read_entry(tier.entry_name())? {
            charts.insert(Chart::from_json(tier, &bytes)?);
        }
    }
    Ok(charts)
}

fn read_tempo<S: EntrySource>(description: &Description, source: &mut S) -> Result<TempoTimeline> {
    if !description.has_midi() {
        return Ok(TempoTimeline::default());
    }

    match source.read_entry(&description.midi_file)? {
        Some(bytes) => Ok(TempoTimeline::new(midi::read_tempo_events(
            &bytes,
            &description.midi_file,
        )?)),
        None => {
            warn!(
                "Timeline '{}' named by {} is not in the package",
                description.midi_file,
                entries::DESCRIPTION
            );
            Ok(TempoTimeline::default())
        }
    }
}
