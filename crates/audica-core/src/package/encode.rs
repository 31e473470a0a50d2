use std::collections::HashSet;
use std::io::{Cursor, Write};

use tracing::debug;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::chart::Tier;
use crate::config::entries;
use crate::error::Result;
use crate::package::Package;
use crate::tempo::midi;

/// Chart entries in the order they are written.
const CHART_WRITE_ORDER: [Tier; 4] = [Tier::Expert, Tier::Advanced, Tier::Moderate, Tier::Beginner];

impl Package {
    /// Encode the package into archive bytes.
    ///
    /// Entry names come from the descriptor, so an export keeps the layout it
    /// was read with. Only the timeline is deflated; everything else is stored.
    pub fn encode(&self) -> Result<Vec<u8>> {
        let mut writer = EntryWriter::new();

        writer.stored(entries::DESCRIPTION, &self.description.to_json()?)?;

        for tier in CHART_WRITE_ORDER {
            if let Some(chart) = self.charts.get(tier) {
                writer.stored(tier.entry_name(), &chart.to_json()?)?;
            }
        }

        for (_, reference) in self.audio.present() {
            if let Some(payload) = &reference.payload {
                writer.stored(&reference.mogg_path, payload)?;
            }
        }
        for (_, reference) in self.audio.present() {
            writer.stored(&reference.path, &reference.descriptor)?;
        }

        if self.description.has_midi() && !self.tempo.is_empty() {
            let timeline = midi::write_tempo_events(self.tempo.events())?;
            writer.deflated(&self.description.midi_file, &timeline)?;
        }

        if let Some(art) = &self.album_art {
            writer.stored(entries::ALBUM_ART, art)?;
        }

        writer.finish()
    }
}

/// Zip writer that writes each entry name at most once.
struct EntryWriter {
    zip: ZipWriter<Cursor<Vec<u8>>>,
    written: HashSet<String>,
}

impl EntryWriter {
    fn new() -> Self {
        Self {
            zip: ZipWriter::new(Cursor::new(Vec::new())),
            written: HashSet::new(),
        }
    }

    fn stored(&mut self, name: &str, bytes: &[u8]) -> Result<()> {
        self.add(name, bytes, CompressionMethod::Stored)
    }

    fn deflated(&mut self, name: &str, bytes: &[u8]) -> Result<()> {
        self.add(name, bytes, CompressionMethod::Deflated)
    }

    fn add(&mut self, name: &str, bytes: &[u8], method: CompressionMethod) -> Result<()> {
        if name.is_empty() {
            return Ok(());
        }
        if !self.written.insert(name.to_string()) {
            debug!("Entry '{}' already written, skipping duplicate", name);
            return Ok(());
        }

        let options = SimpleFileOptions::default().compression_method(method);
        self.zip.start_file(name, options)?;
        self.zip.write_all(bytes)?;
        Ok(())
    }

    fn finish(self) -> Result<Vec<u8>> {
        Ok(self.zip.finish()?.into_inner())
    }
}
