//! CLI command implementations.

pub mod export;
pub mod hash;
pub mod info;
pub mod metadata;
pub mod rate;

use audica_core::RatingWeights;
use tracing::{info, warn};

/// Load rating weights, falling back to the defaults when the file is unusable.
pub fn load_weights(path: Option<&str>) -> RatingWeights {
    let Some(path) = path else {
        return RatingWeights::default();
    };
    match RatingWeights::load(path) {
        Ok(weights) => {
            info!("Loaded rating weights from {}", path);
            weights
        }
        Err(e) => {
            warn!("Failed to load rating weights: {}, using defaults", e);
            RatingWeights::default()
        }
    }
}

/// Format an optional rating as a CSV field. Unrated tiers are empty.
pub fn rating_field(rating: Option<f32>) -> String {
    rating.map(|r| format!("{:.3}", r)).unwrap_or_default()
}
