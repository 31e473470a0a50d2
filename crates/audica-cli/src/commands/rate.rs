//! Rate command implementation.

use std::str::FromStr;

use anyhow::{Result, anyhow};
use audica_core::{Package, Tier};

use super::{load_weights, rating_field};

/// Rate every tier of a package, or a single one
pub fn run(path: &str, tier: Option<&str>, weights_file: Option<&str>) -> Result<()> {
    let weights = load_weights(weights_file);
    let package = Package::open(path)?;
    let ratings = package.ratings(&weights);

    let tiers = match tier {
        Some(name) => {
            vec![Tier::from_str(name).map_err(|_| anyhow!("Unknown difficulty tier: {}", name))?]
        }
        None => Tier::ALL.into_iter().rev().collect(),
    };

    for tier in tiers {
        let rating = ratings.get(tier);
        let value = if package.charts.contains(tier) {
            rating_field(rating)
        } else {
            "-".to_string()
        };
        println!("{:<9}{}", tier.name(), value);
    }

    Ok(())
}
