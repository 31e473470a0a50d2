pub mod audio;
pub mod chart;
pub mod config;
pub mod error;
pub mod identity;
pub mod package;
pub mod rating;
pub mod tempo;

pub use audio::{AudioLinks, AudioReference, AudioRole, resolve_audio};
pub use chart::{Behavior, Chart, Charts, Cue, Description, GridOffset, HandType, Tier};
pub use config::{BehaviorWeights, RatingWeights};
pub use error::{Error, Result};
pub use identity::{chart_hash, song_identity_hash, weak_hash};
pub use package::{ArchiveSource, EntrySource, Package, PackageMetadata, check_path};
pub use rating::{ChartRating, PackageRatings, rate, rate_package};
pub use tempo::{TempoEvent, TempoTimeline, tick_to_milliseconds};
