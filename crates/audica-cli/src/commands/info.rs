//! Info command: quick package summary.

use anyhow::Result;
use audica_core::{PackageMetadata, Tier};
use owo_colors::OwoColorize;

/// Show the package summary without decoding charts
pub fn run(path: &str, json: bool) -> Result<()> {
    let metadata = PackageMetadata::from_path(path)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&metadata)?);
    } else {
        print!("{}", format_summary(&metadata));
    }

    Ok(())
}

fn format_summary(metadata: &PackageMetadata) -> String {
    let description = &metadata.description;
    let mut output = String::new();

    let title = if description.title.is_empty() {
        description.song_id.as_str()
    } else {
        description.title.as_str()
    };
    output.push_str(&format!("{}\n", title.bold()));
    if !description.artist.is_empty() {
        output.push_str(&format!("  Artist:  {}\n", description.artist));
    }
    if !description.author.is_empty() {
        output.push_str(&format!("  Mapper:  {}\n", description.author));
    }
    output.push_str(&format!("  Song ID: {}\n", description.song_id));
    output.push_str(&format!("  Tempo:   {}\n", description.tempo));

    let tiers: Vec<String> = Tier::ALL
        .into_iter()
        .rev()
        .map(|tier| {
            if metadata.has_tier(tier) {
                tier.name().green().to_string()
            } else {
                tier.name().dimmed().to_string()
            }
        })
        .collect();
    output.push_str(&format!("  Charts:  {}\n", tiers.join(" ")));
    output.push_str(&format!("  Size:    {} bytes\n", metadata.file_length));
    output.push_str(&format!("  Weak:    {}\n", metadata.weak_hash.dimmed()));
    output
}
