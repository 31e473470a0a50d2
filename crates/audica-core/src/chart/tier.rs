use serde::{Deserialize, Serialize};
use strum::{EnumString, IntoStaticStr};

use crate::config::entries;

/// Difficulty tier of a chart.
///
/// Parsing accepts the host-facing aliases as well (`easy`, `normal`, `standard`, `hard`).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Tier {
    #[strum(to_string = "beginner", serialize = "easy")]
    Beginner,
    #[strum(to_string = "moderate", serialize = "standard", serialize = "normal")]
    Moderate,
    #[strum(to_string = "advanced", serialize = "hard")]
    Advanced,
    #[strum(to_string = "expert")]
    Expert,
}

impl Tier {
    /// All tiers, easiest first. This is also the order used for identity hashing.
    pub const ALL: [Tier; 4] = [Tier::Beginner, Tier::Moderate, Tier::Advanced, Tier::Expert];

    pub fn entry_name(&self) -> &'static str {
        match self {
            Self::Beginner => entries::BEGINNER,
            Self::Moderate => entries::MODERATE,
            Self::Advanced => entries::ADVANCED,
            Self::Expert => entries::EXPERT,
        }
    }

    pub fn from_entry_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tier| tier.entry_name() == name)
    }

    pub fn name(&self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
