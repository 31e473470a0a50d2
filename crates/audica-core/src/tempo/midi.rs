//! Tempo track of the tick-timeline payload (a Standard MIDI File).
//!
//! Only tempo meta events are read; every other event is ignored. Writing
//! produces a single-track file holding just the tempo map.

use midly::num::{u15, u24, u28};
use midly::{Format, Header, MetaMessage, Smf, Timing, TrackEvent, TrackEventKind};
use tracing::{debug, warn};

use crate::config::timing::TICKS_PER_QUARTER;
use crate::error::{Error, Result};
use crate::tempo::TempoEvent;

/// Extract tempo events from a MIDI payload, sorted by absolute tick.
///
/// `entry` names the payload inside the package and is only used for errors.
pub fn read_tempo_events(bytes: &[u8], entry: &str) -> Result<Vec<TempoEvent>> {
    let smf = Smf::parse(bytes).map_err(|e| Error::malformed(entry, e))?;

    match smf.header.timing {
        Timing::Metrical(ticks) if ticks.as_int() == TICKS_PER_QUARTER => {}
        Timing::Metrical(ticks) => {
            warn!(
                "{} uses {} ticks per quarter (expected {}), ticks are used as-is",
                entry,
                ticks.as_int(),
                TICKS_PER_QUARTER
            );
        }
        Timing::Timecode(fps, subframe) => {
            warn!(
                "{} uses timecode timing ({:?} fps, {} subframes), ticks are used as-is",
                entry, fps, subframe
            );
        }
    }

    let mut events = Vec::new();
    for track in &smf.tracks {
        let mut tick: i64 = 0;
        for event in track {
            tick += i64::from(event.delta.as_int());
            if let TrackEventKind::Meta(MetaMessage::Tempo(micros)) = event.kind {
                events.push(TempoEvent::new(tick, micros.as_int()));
            }
        }
    }
    events.sort_by_key(|e| e.tick);

    debug!(
        "Read {} tempo events from {} ({} tracks)",
        events.len(),
        entry,
        smf.tracks.len()
    );

    Ok(events)
}

/// Encode tempo events as a single-track MIDI file at 480 ticks per quarter.
///
/// `events` must be sorted by tick and start at a non-negative tick.
pub fn write_tempo_events(events: &[TempoEvent]) -> Result<Vec<u8>> {
    let mut track: Vec<TrackEvent<'static>> = Vec::with_capacity(events.len() + 1);
    let mut previous_tick: i64 = 0;

    for event in events {
        let delta = event
            .tick
            .checked_sub(previous_tick)
            .filter(|delta| (0..=i64::from(u28::max_value().as_int())).contains(delta))
            .ok_or_else(|| {
                Error::Encode(format!(
                    "tempo event at tick {} cannot follow tick {}",
                    event.tick, previous_tick
                ))
            })?;
        if event.micros_per_quarter > u24::max_value().as_int() {
            return Err(Error::Encode(format!(
                "tempo {} us per quarter at tick {} is out of range",
                event.micros_per_quarter, event.tick
            )));
        }

        track.push(TrackEvent {
            delta: u28::new(delta as u32),
            kind: TrackEventKind::Meta(MetaMessage::Tempo(u24::new(event.micros_per_quarter))),
        });
        previous_tick = event.tick;
    }

    track.push(TrackEvent {
        delta: u28::new(0),
        kind: TrackEventKind::Meta(MetaMessage::EndOfTrack),
    });

    let mut smf = Smf::new(Header::new(
        Format::SingleTrack,
        Timing::Metrical(u15::new(TICKS_PER_QUARTER)),
    ));
    smf.tracks.push(track);

    let mut out = Vec::new();
    smf.write_std(&mut out)
        .map_err(|e| Error::Encode(format!("failed to write tempo track: {}", e)))?;
    Ok(out)
}
