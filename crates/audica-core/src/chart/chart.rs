use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};
use tracing::warn;

use crate::chart::{Cue, Tier, json_body};
use crate::error::{Error, Result};

/// On-disk layout of a `.cues` entry.
#[derive(Serialize, Deserialize)]
struct ChartDocument {
    cues: Vec<Cue>,
    #[serde(flatten)]
    extra: Map<String, JsonValue>,
}

/// One difficulty tier's cue list.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    pub tier: Tier,
    /// Sorted by non-decreasing tick.
    pub cues: Vec<Cue>,
    /// Top-level keys other than `cues` (e.g. `repeaters`), kept for re-encoding.
    pub extra: Map<String, JsonValue>,
}

impl Chart {
    pub fn new(tier: Tier, mut cues: Vec<Cue>) -> Self {
        sort_cues(tier, &mut cues);
        Self {
            tier,
            cues,
            extra: Map::new(),
        }
    }

    pub fn from_json(tier: Tier, bytes: &[u8]) -> Result<Self> {
        let document: ChartDocument = serde_json::from_slice(json_body(bytes))
            .map_err(|e| Error::malformed(tier.entry_name(), e))?;

        let mut cues = document.cues;
        sort_cues(tier, &mut cues);

        Ok(Self {
            tier,
            cues,
            extra: document.extra,
        })
    }

    pub fn to_json(&self) -> Result<Vec<u8>> {
        let document = ChartDocument {
            cues: self.cues.clone(),
            extra: self.extra.clone(),
        };
        Ok(serde_json::to_vec_pretty(&document)?)
    }

    pub fn is_empty(&self) -> bool {
        self.cues.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cues.len()
    }
}

fn sort_cues(tier: Tier, cues: &mut [Cue]) {
    if !cues.is_sorted_by_key(|c| c.tick) {
        warn!("{} cues are not ordered by tick, sorting", tier);
        cues.sort_by_key(|c| c.tick);
    }
}

/// The up-to-four charts of a package.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Charts {
    pub beginner: Option<Chart>,
    pub moderate: Option<Chart>,
    pub advanced: Option<Chart>,
    pub expert: Option<Chart>,
}

impl Charts {
    pub fn get(&self, tier: Tier) -> Option<&Chart> {
        match tier {
            Tier::Beginner => self.beginner.as_ref(),
            Tier::Moderate => self.moderate.as_ref(),
            Tier::Advanced => self.advanced.as_ref(),
            Tier::Expert => self.expert.as_ref(),
        }
    }

    /// Store a chart in the slot of its tier, returning the chart it replaced.
    pub fn insert(&mut self, chart: Chart) -> Option<Chart> {
        let slot = match chart.tier {
            Tier::Beginner => &mut self.beginner,
            Tier::Moderate => &mut self.moderate,
            Tier::Advanced => &mut self.advanced,
            Tier::Expert => &mut self.expert,
        };
        slot.replace(chart)
    }

    pub fn contains(&self, tier: Tier) -> bool {
        self.get(tier).is_some()
    }

    /// Present charts, beginner first.
    pub fn present(&self) -> Vec<(Tier, &Chart)> {
        Tier::ALL
            .into_iter()
            .filter_map(|tier| self.get(tier).map(|chart| (tier, chart)))
            .collect()
    }

    pub fn count(&self) -> usize {
        Tier::ALL.into_iter().filter(|t| self.contains(*t)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{Behavior, GridOffset, HandType};

    fn cue(tick: i64) -> Cue {
        Cue {
            tick,
            tick_length: 0,
            pitch: 30,
            velocity: 20,
            grid_offset: GridOffset::default(),
            z_offset: 0.0,
            hand_type: HandType::Left,
            behavior: Behavior::Standard,
        }
    }

    #[test]
    fn test_chart_from_json_keeps_extra_keys() {
        let json = br#"{"cues":[{"tick":480,"pitch":30,"handType":2,"behavior":0}],
            "repeaters":[{"tick":0,"tickLength":960}]}"#;
        let chart = Chart::from_json(Tier::Expert, json).unwrap();

        assert_eq!(chart.len(), 1);
        assert!(chart.extra.contains_key("repeaters"));

        let reparsed = Chart::from_json(Tier::Expert, &chart.to_json().unwrap()).unwrap();
        assert_eq!(reparsed, chart);
    }

    #[test]
    fn test_chart_from_json_malformed() {
        let err = Chart::from_json(Tier::Advanced, b"{\"cues\": [").unwrap_err();
        match err {
            Error::MalformedEntry { entry, .. } => assert_eq!(entry, "advanced.cues"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_chart_sorts_out_of_order_cues() {
        let chart = Chart::new(Tier::Beginner, vec![cue(960), cue(0), cue(480)]);
        let ticks: Vec<i64> = chart.cues.iter().map(|c| c.tick).collect();
        assert_eq!(ticks, vec![0, 480, 960]);
    }

    #[test]
    fn test_charts_present_order() {
        let mut charts = Charts::default();
        charts.insert(Chart::new(Tier::Expert, vec![cue(0)]));
        charts.insert(Chart::new(Tier::Beginner, vec![]));

        let tiers: Vec<Tier> = charts.present().into_iter().map(|(t, _)| t).collect();
        assert_eq!(tiers, vec![Tier::Beginner, Tier::Expert]);
        assert_eq!(charts.count(), 2);
        assert!(!charts.contains(Tier::Moderate));
    }

    #[test]
    fn test_charts_insert_replaces() {
        let mut charts = Charts::default();
        assert!(charts.insert(Chart::new(Tier::Expert, vec![])).is_none());
        let previous = charts.insert(Chart::new(Tier::Expert, vec![cue(0)]));
        assert!(previous.unwrap().is_empty());
        assert_eq!(charts.get(Tier::Expert).unwrap().len(), 1);
    }
}
