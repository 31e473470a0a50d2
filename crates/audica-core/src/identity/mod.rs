//! Song identity hashing.
//!
//! The identity hash is derived from chart content and the tempo map only, so
//! it survives re-serialization of the package. The weak hash only looks at
//! the song id and the file size and is meant for quick catalog lookups.

use crate::chart::{Chart, Description, Tier};
use crate::package::Package;
use crate::tempo::TempoEvent;

/// Score data defaults that are part of every chart descriptor.
const SCORE_DATA_DESCRIPTOR: &str = "500;750;750;1000;1000;1000;10;4;";

/// Scoring configuration defaults that are part of every chart descriptor.
const SCORING_DESCRIPTOR: &str = "0.500;2.500;2.000;100.000;100.000;0.975;0.250;0.600;";

pub fn md5_hex(input: &str) -> String {
    format!("{:X}", md5::compute(input.as_bytes()))
}

/// Tempo section of a chart descriptor.
///
/// Tempo events that keep the (rounded) BPM of the previous event are dropped
/// first. A single tempo starting at tick 0 is written as `"{bpm};"`, anything
/// else as `"{bpm};{tick};"` per change plus a closing `";"`.
pub fn tempo_descriptor(events: &[TempoEvent]) -> String {
    let mut changes: Vec<(i64, i64)> = Vec::with_capacity(events.len());
    let mut last_bpm = 0;
    for event in events {
        let bpm = event.rounded_bpm();
        if bpm != last_bpm {
            changes.push((bpm, event.tick));
        }
        last_bpm = bpm;
    }

    match events.first() {
        Some(first) if first.tick == 0 && changes.len() < 2 => {
            format!("{};", first.rounded_bpm())
        }
        _ => {
            let mut descriptor: String = changes
                .iter()
                .map(|(bpm, tick)| format!("{};{};", bpm, tick))
                .collect();
            descriptor.push(';');
            descriptor
        }
    }
}

/// Full canonical text of a chart. An absent chart has no cue section.
pub fn canonical_descriptor(chart: Option<&Chart>, tempo: &[TempoEvent]) -> String {
    let mut descriptor = tempo_descriptor(tempo);
    descriptor.push_str(SCORE_DATA_DESCRIPTOR);
    descriptor.push_str(SCORING_DESCRIPTOR);
    if let Some(chart) = chart {
        for cue in &chart.cues {
            descriptor.push_str(&cue.descriptor());
        }
    }
    descriptor
}

/// MD5 of the canonical descriptor, or an empty string for an absent chart.
pub fn chart_hash(chart: Option<&Chart>, tempo: &[TempoEvent]) -> String {
    match chart {
        Some(_) => md5_hex(&canonical_descriptor(chart, tempo)),
        None => String::new(),
    }
}

/// `{songID}_{md5}` where the digest covers the chart hashes, beginner first.
pub fn song_identity_hash(package: &Package) -> String {
    let tempo = package.tempo.events();
    let combined: String = Tier::ALL
        .into_iter()
        .map(|tier| chart_hash(package.charts.get(tier), tempo))
        .collect();
    format!("{}_{}", package.description.song_id, md5_hex(&combined))
}

/// MD5 of the song id followed by the package size in bytes.
pub fn weak_hash(description: &Description, file_length: u64) -> String {
    md5_hex(&format!("{}{}", description.song_id, file_length))
}
