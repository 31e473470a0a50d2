//! Tempo timeline: tick to wall-clock conversion.
//!
//! Charts are positioned in ticks (480 per quarter note). The tick-timeline
//! payload carries the tempo changes needed to turn ticks into milliseconds;
//! `midi` reads and writes that payload.

pub mod midi;

use serde::{Deserialize, Serialize};

use crate::config::timing::{
    MICROSECONDS_PER_MILLISECOND, MICROSECONDS_PER_MINUTE, TICKS_PER_QUARTER,
};

/// A tempo change at a tick position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TempoEvent {
    pub tick: i64,
    pub micros_per_quarter: u32,
}

impl TempoEvent {
    pub fn new(tick: i64, micros_per_quarter: u32) -> Self {
        Self {
            tick,
            micros_per_quarter,
        }
    }

    /// Build an event from beats per minute, rounding to whole microseconds.
    pub fn from_bpm(tick: i64, bpm: f64) -> Self {
        Self::new(tick, (MICROSECONDS_PER_MINUTE / bpm).round() as u32)
    }

    pub fn bpm(&self) -> f64 {
        MICROSECONDS_PER_MINUTE / f64::from(self.micros_per_quarter)
    }

    /// BPM rounded half away from zero.
    pub fn rounded_bpm(&self) -> i64 {
        self.bpm().round() as i64
    }

    /// Milliseconds covered by `ticks` at this tempo.
    fn span_ms(&self, ticks: f64) -> f64 {
        ticks * f64::from(self.micros_per_quarter)
            / (f64::from(TICKS_PER_QUARTER) * MICROSECONDS_PER_MILLISECOND)
    }
}

/// Ordered tempo changes of a song.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TempoTimeline {
    events: Vec<TempoEvent>,
}

impl TempoTimeline {
    /// Build a timeline. Events are stable-sorted by tick.
    pub fn new(mut events: Vec<TempoEvent>) -> Self {
        events.sort_by_key(|e| e.tick);
        Self { events }
    }

    pub fn events(&self) -> &[TempoEvent] {
        &self.events
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn tick_to_milliseconds(&self, tick: i64) -> f64 {
        tick_to_milliseconds(tick, &self.events)
    }
}

impl From<Vec<TempoEvent>> for TempoTimeline {
    fn from(events: Vec<TempoEvent>) -> Self {
        Self::new(events)
    }
}

/// Convert a tick to milliseconds since the first tempo event.
///
/// `events` must be sorted by tick. Ticks before the first event are
/// extrapolated backwards at the initial tempo. An empty list maps every tick to 0.
pub fn tick_to_milliseconds(tick: i64, events: &[TempoEvent]) -> f64 {
    let Some(first) = events.first() else {
        return 0.0;
    };

    if tick <= first.tick {
        return first.span_ms(ticks_between(first.tick, tick));
    }

    let mut elapsed = 0.0;
    for (i, event) in events.iter().enumerate() {
        match events.get(i + 1) {
            Some(next) if next.tick < tick => {
                elapsed += event.span_ms(ticks_between(event.tick, next.tick));
            }
            _ => {
                elapsed += event.span_ms(ticks_between(event.tick, tick));
                break;
            }
        }
    }
    elapsed
}

/// Signed tick distance in floating point.
fn ticks_between(from: i64, to: i64) -> f64 {
    to as f64 - from as f64
}
