use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::chart::Behavior;
use crate::error::Result;

/// Per-behavior difficulty modifiers used for readability.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BehaviorWeights {
    pub standard: f32,
    pub vertical: f32,
    pub horizontal: f32,
    pub hold: f32,
    pub chain_start: f32,
    pub chain: f32,
    pub melee: f32,
}

impl Default for BehaviorWeights {
    fn default() -> Self {
        Self {
            standard: 1.0,
            vertical: 1.2,
            horizontal: 1.3,
            hold: 1.0,
            chain_start: 1.2,
            chain: 0.2,
            melee: 0.6,
        }
    }
}

impl BehaviorWeights {
    pub fn get(&self, behavior: Behavior) -> f32 {
        match behavior {
            Behavior::Standard => self.standard,
            Behavior::Vertical => self.vertical,
            Behavior::Horizontal => self.horizontal,
            Behavior::Hold => self.hold,
            Behavior::ChainStart => self.chain_start,
            Behavior::Chain => self.chain,
            Behavior::Melee => self.melee,
        }
    }
}

/// Tunable constants of the difficulty rating.
///
/// The defaults reproduce the reference rating table. A weights file only needs
/// the keys it overrides, e.g. `{"lengthMultiplier": 1.0, "behavior": {"melee": 0.8}}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RatingWeights {
    pub spacing_multiplier: f32,
    pub length_multiplier: f32,
    pub density_multiplier: f32,
    pub readability_multiplier: f32,
    pub behavior: BehaviorWeights,
    /// Charts with fewer cues are rated 0.
    pub min_cues: usize,
    /// Charts must be strictly longer than this to be rated.
    pub min_duration_ms: f32,
}

impl Default for RatingWeights {
    fn default() -> Self {
        Self {
            spacing_multiplier: 1.0,
            length_multiplier: 0.7,
            density_multiplier: 1.0,
            readability_multiplier: 1.2,
            behavior: BehaviorWeights::default(),
            min_cues: 15,
            min_duration_ms: 30_000.0,
        }
    }
}

impl RatingWeights {
    /// Load weights from a JSON file. Missing keys keep their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn weight_for(&self, behavior: Behavior) -> f32 {
        self.behavior.get(behavior)
    }
}
