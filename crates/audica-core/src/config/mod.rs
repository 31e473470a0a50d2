//! Fixed package layout, timing constants and tunable rating weights.
//!
//! - `entries` - fixed entry names inside a song package
//! - `timing` - tick resolution and time unit conversions
//! - `RatingWeights` - difficulty weights used by the rating engine

mod weights;

pub use weights::*;

/// Fixed entry names inside a song package.
///
/// Audio and timeline entries are named by the descriptor and so are not listed here.
pub mod entries {
    /// Mandatory JSON song descriptor.
    pub const DESCRIPTION: &str = "song.desc";

    pub const EXPERT: &str = "expert.cues";
    pub const ADVANCED: &str = "advanced.cues";
    pub const MODERATE: &str = "moderate.cues";
    pub const BEGINNER: &str = "beginner.cues";

    /// Optional cover image.
    pub const ALBUM_ART: &str = "song.png";

    /// File extension of a song package on disk.
    pub const PACKAGE_EXTENSION: &str = "audica";
}

/// Tick timeline configuration.
pub mod timing {
    /// Tick resolution of every chart and tempo timeline.
    pub const TICKS_PER_QUARTER: u16 = 480;

    pub const MICROSECONDS_PER_MINUTE: f64 = 60_000_000.0;

    pub const MICROSECONDS_PER_MILLISECOND: f64 = 1_000.0;
}
