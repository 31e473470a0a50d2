//! Metadata command: one CSV line per package.

use std::path::Path;

use anyhow::Result;
use audica_core::{Package, PackageRatings, RatingWeights, Tier};
use tracing::error;

use super::{load_weights, rating_field};

pub const CSV_HEADER: &str = "file,identityHash,expert,advanced,moderate,beginner";

/// Print the identity hash and tier ratings of each package
///
/// The column header is printed only when `header` is set.
pub fn run(paths: &[String], weights_file: Option<&str>, header: bool) -> Result<()> {
    let weights = load_weights(weights_file);

    if header {
        println!("{}", CSV_HEADER);
    }
    for path in paths {
        if !Path::new(path).is_file() {
            error!("File not found: {}", path);
            continue;
        }
        match csv_line(path, &weights) {
            Ok(line) => println!("{}", line),
            Err(e) => error!("Failed to read {}: {}", path, e),
        }
    }

    Ok(())
}

fn csv_line(path: &str, weights: &RatingWeights) -> Result<String> {
    let package = Package::open(path)?;
    let ratings = package.ratings(weights);
    Ok(format_line(path, &package.identity_hash(), &ratings))
}

fn format_line(path: &str, identity_hash: &str, ratings: &PackageRatings) -> String {
    let file = Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string());

    let mut fields = vec![file, identity_hash.to_string()];
    for tier in [Tier::Expert, Tier::Advanced, Tier::Moderate, Tier::Beginner] {
        fields.push(rating_field(ratings.get(tier)));
    }
    fields.join(",")
}
