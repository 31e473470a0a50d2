//! Export command: decode and re-encode a package.

use std::path::Path;

use anyhow::{Result, bail};
use audica_core::Package;
use tracing::{info, warn};

/// Re-encode `input` into `output`, optionally replacing the cover image
pub fn run(input: &str, output: &str, album_art: Option<&str>) -> Result<()> {
    if Path::new(input) == Path::new(output) {
        bail!("Output path must differ from the input: {}", output);
    }

    let mut package = Package::open(input)?;
    info!("Loaded {} ({})", package.song_id(), input);

    if let Err(e) = package.require_playable() {
        warn!("{}", e);
    }

    if let Some(art) = album_art {
        if Path::new(art).is_file() {
            package.set_album_art_from_path(art)?;
            info!("Replaced cover image with {}", art);
        } else {
            warn!("Cover image not found: {}", art);
        }
    }

    package.save(output)?;
    eprintln!("Exported to: {}", output);

    Ok(())
}
