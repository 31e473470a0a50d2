//! Difficulty rating of charts.
//!
//! The rating combines hand travel distance (spacing), per-behavior
//! readability weights and chart length:
//!
//! ```text
//! rating = (spacing + readability) / duration * 500 + duration / 100000 * lengthMultiplier
//! ```
//!
//! Charts with fewer than 15 cues or lasting 30 seconds or less are rated 0.

use std::str::FromStr;

use serde::Serialize;
use tracing::trace;

use crate::chart::{Behavior, Chart, Cue, HandType, Tier};
use crate::config::RatingWeights;
use crate::package::Package;
use crate::tempo::TempoTimeline;

/// Spacing contributed by moving into a melee cue: smallest positive `f32`.
pub const MELEE_TRANSITION: f32 = f32::from_bits(1);

/// Intermediate values and result of rating one chart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ChartRating {
    pub rating: f32,
    pub spacing: f32,
    pub density: f32,
    pub readability: f32,
    pub duration_ms: f32,
}

/// Rate a chart with the default weights.
pub fn rate(chart: &Chart, tempo: &TempoTimeline) -> f32 {
    evaluate(&chart.cues, tempo, &RatingWeights::default()).rating
}

pub fn rate_with(chart: &Chart, tempo: &TempoTimeline, weights: &RatingWeights) -> f32 {
    evaluate(&chart.cues, tempo, weights).rating
}

/// Rate a cue list. Degenerate charts yield a zero rating, never an error.
pub fn evaluate(cues: &[Cue], tempo: &TempoTimeline, weights: &RatingWeights) -> ChartRating {
    let (Some(first), Some(last)) = (cues.first(), cues.last()) else {
        return ChartRating::default();
    };

    let duration_ms =
        (tempo.tick_to_milliseconds(last.tick) - tempo.tick_to_milliseconds(first.tick)) as f32;

    if cues.len() < weights.min_cues || duration_ms <= weights.min_duration_ms {
        return ChartRating {
            duration_ms,
            ..Default::default()
        };
    }

    let hands = HandGroups::split(cues);
    trace!(
        "Rating {} cues: {} left, {} right, {} either",
        cues.len(),
        hands.left.len(),
        hands.right.len(),
        hands.either.len()
    );

    let spacing = hand_spacing(&hands.left, weights) + hand_spacing(&hands.right, weights);
    let density = cues.len() as f32 / duration_ms * weights.density_multiplier;
    let readability: f32 = cues
        .iter()
        .map(|cue| weights.weight_for(cue.behavior) * weights.readability_multiplier)
        .sum();

    let rating = ((spacing + readability) / duration_ms) * 500.0
        + (duration_ms / 100_000.0 * weights.length_multiplier);

    ChartRating {
        rating,
        spacing,
        density,
        readability,
        duration_ms,
    }
}

/// Cues split by hand, each group in chart order.
struct HandGroups<'a> {
    left: Vec<&'a Cue>,
    right: Vec<&'a Cue>,
    either: Vec<&'a Cue>,
}

impl<'a> HandGroups<'a> {
    fn split(cues: &'a [Cue]) -> Self {
        let mut groups = HandGroups {
            left: Vec::new(),
            right: Vec::new(),
            either: Vec::new(),
        };
        for cue in cues {
            match cue.hand_type {
                HandType::Left => groups.left.push(cue),
                HandType::Right => groups.right.push(cue),
                HandType::Either => groups.either.push(cue),
            }
        }
        groups
    }
}

fn hand_spacing(cues: &[&Cue], weights: &RatingWeights) -> f32 {
    cues.windows(2)
        .map(|pair| transition_distance(pair[0], pair[1], weights))
        .sum()
}

/// Spacing contributed by moving from `previous` to `cue` with the same hand.
pub fn transition_distance(previous: &Cue, cue: &Cue, weights: &RatingWeights) -> f32 {
    if cue.behavior == Behavior::Melee {
        return MELEE_TRANSITION;
    }
    let (x0, y0) = previous.coordinates();
    let (x1, y1) = cue.coordinates();
    let (dx, dy) = (x1 - x0, y1 - y0);
    (dx * dx + dy * dy).sqrt() * weights.spacing_multiplier
}

/// Ratings of every tier of a package. `None` means the tier is unrated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PackageRatings {
    pub beginner: Option<f32>,
    pub moderate: Option<f32>,
    pub advanced: Option<f32>,
    pub expert: Option<f32>,
}

impl PackageRatings {
    pub fn get(&self, tier: Tier) -> Option<f32> {
        match tier {
            Tier::Beginner => self.beginner,
            Tier::Moderate => self.moderate,
            Tier::Advanced => self.advanced,
            Tier::Expert => self.expert,
        }
    }

    fn set(&mut self, tier: Tier, rating: f32) {
        let slot = match tier {
            Tier::Beginner => &mut self.beginner,
            Tier::Moderate => &mut self.moderate,
            Tier::Advanced => &mut self.advanced,
            Tier::Expert => &mut self.expert,
        };
        *slot = Some(rating);
    }

    /// Look up a rating by tier name or alias (`easy`, `normal`, `hard`, `expert`, ...).
    /// Unknown names and unrated tiers give 0.
    pub fn for_name(&self, name: &str) -> f32 {
        Tier::from_str(name)
            .ok()
            .and_then(|tier| self.get(tier))
            .unwrap_or(0.0)
    }
}

/// Rate every present chart. Charts without cues stay unrated.
pub fn rate_package(package: &Package, weights: &RatingWeights) -> PackageRatings {
    let mut ratings = PackageRatings::default();
    for (tier, chart) in package.charts.present() {
        if chart.is_empty() {
            continue;
        }
        ratings.set(tier, rate_with(chart, &package.tempo, weights));
    }
    ratings
}
