//! Song descriptor and chart data structures.
//!
//! This module contains the value types decoded from a song package:
//! - `Description` - song metadata and the paths of linked entries
//! - `Tier` - the four difficulty tiers and their entry names
//! - `Chart`, `Charts` - per-tier cue lists
//! - `Cue`, `Behavior`, `HandType`, `GridOffset` - individual notes

mod chart;
mod cue;
mod description;
mod tier;

pub use chart::*;
pub use cue::*;
pub use description::*;
pub use tier::*;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Entry content with a leading UTF-8 byte order mark removed.
pub(crate) fn json_body(bytes: &[u8]) -> &[u8] {
    bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes)
}
