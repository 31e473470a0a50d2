//! Shared fixtures: builds song packages in memory.

#![allow(dead_code)]

use std::io::{Cursor, Write};

use audica_core::tempo::midi::write_tempo_events;
use audica_core::{Behavior, Cue, GridOffset, HandType, TempoEvent};
use serde_json::json;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

pub const SONG_ID: &str = "fixturesong";

pub fn cue(tick: i64, pitch: i32, hand: HandType, behavior: Behavior) -> Cue {
    Cue {
        tick,
        tick_length: 120,
        pitch,
        velocity: 20,
        grid_offset: GridOffset { x: 0.0, y: 0.0 },
        z_offset: 0.0,
        hand_type: hand,
        behavior,
    }
}

/// `count` cues evenly spread from tick 0 to `last_tick`, alternating hands.
pub fn spread_cues(count: usize, last_tick: i64) -> Vec<Cue> {
    (0..count)
        .map(|i| {
            let tick = if count > 1 {
                last_tick * i as i64 / (count as i64 - 1)
            } else {
                0
            };
            let hand = if i % 2 == 0 { HandType::Left } else { HandType::Right };
            let behavior = match i % 5 {
                0 => Behavior::Standard,
                1 => Behavior::Vertical,
                2 => Behavior::Horizontal,
                3 => Behavior::ChainStart,
                _ => Behavior::Melee,
            };
            let mut cue = cue(tick, 24 + (i as i32 * 7) % 36, hand, behavior);
            cue.grid_offset = GridOffset {
                x: (i % 3) as f32 * 0.25,
                y: -((i % 2) as f32) * 0.5,
            };
            cue
        })
        .collect()
}

pub fn description_json(song_id: &str) -> Vec<u8> {
    serde_json::to_vec(&json!({
        "songID": song_id,
        "moggSong": "song.moggsong",
        "title": "Fixture Song",
        "artist": "Fixture Artist",
        "author": "tester",
        "midiFile": "song.mid",
        "fusionSpatialized": "fusion/guns/default/drums_default_spatial.fusion",
        "fusionUnspatialized": "fusion/guns/default/drums_default_sub.fusion",
        "sustainSongRight": "song_sustain_r.moggsong",
        "sustainSongLeft": "song_sustain_l.moggsong",
        "fxSong": "song_extras.moggsong",
        "tempo": 120.0,
        "songEndEvent": "event:/song_end/song_end_A",
        "prerollSeconds": 0.5,
        "previewStartSeconds": 30.0,
        "useMidiForCues": false,
        "hidden": false,
        "offset": 0
    }))
    .unwrap()
}

pub fn chart_json(cues: &[Cue]) -> Vec<u8> {
    serde_json::to_vec(&json!({ "cues": cues, "repeaters": [] })).unwrap()
}

pub fn tempo_events() -> Vec<TempoEvent> {
    vec![
        TempoEvent::new(0, 500_000),
        TempoEvent::new(7680, 500_000),
        TempoEvent::new(15360, 428_571),
    ]
}

/// Every entry of a complete package, in a typical layout.
pub fn full_entries() -> Vec<(String, Vec<u8>)> {
    let entries: Vec<(&str, Vec<u8>)> = vec![
        ("song.desc", description_json(SONG_ID)),
        ("expert.cues", chart_json(&spread_cues(64, 96_000))),
        ("advanced.cues", chart_json(&spread_cues(40, 96_000))),
        ("moderate.cues", chart_json(&spread_cues(20, 96_000))),
        ("beginner.cues", chart_json(&spread_cues(10, 96_000))),
        ("song.mid", write_tempo_events(&tempo_events()).unwrap()),
        ("song.moggsong", b"(mogg_path \"song.mogg\")\n(midi_path \"song.mid\")\n".to_vec()),
        ("song.mogg", b"MOGG-main-payload".to_vec()),
        ("song_sustain_l.moggsong", b"(mogg_path \"song_sustain_l.mogg\")\n".to_vec()),
        ("song_sustain_l.mogg", b"MOGG-left-payload".to_vec()),
        ("song_sustain_r.moggsong", b"(mogg_path \"song_sustain_r.mogg\")\n".to_vec()),
        ("song_sustain_r.mogg", b"MOGG-right-payload".to_vec()),
        ("song.png", b"\x89PNG fake image".to_vec()),
    ];
    entries
        .into_iter()
        .map(|(name, bytes)| (name.to_string(), bytes))
        .collect()
}

pub fn build_archive(entries: &[(String, Vec<u8>)]) -> Vec<u8> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, bytes) in entries {
        zip.start_file(name.as_str(), SimpleFileOptions::default())
            .unwrap();
        zip.write_all(bytes).unwrap();
    }
    zip.finish().unwrap().into_inner()
}

pub fn full_package_bytes() -> Vec<u8> {
    build_archive(&full_entries())
}

/// `full_entries` with the named entries removed.
pub fn entries_without(names: &[&str]) -> Vec<(String, Vec<u8>)> {
    full_entries()
        .into_iter()
        .filter(|(name, _)| !names.contains(&name.as_str()))
        .collect()
}

/// `full_entries` with one entry's content replaced.
pub fn entries_with(name: &str, bytes: Vec<u8>) -> Vec<(String, Vec<u8>)> {
    let mut entries = full_entries();
    for entry in entries.iter_mut() {
        if entry.0 == name {
            entry.1 = bytes.clone();
        }
    }
    entries
}
