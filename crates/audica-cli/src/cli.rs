//! CLI argument definitions for audica.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "audica")]
#[command(about = "Audica song package toolkit", version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print a CSV line with identity hash and ratings per package
    Metadata {
        /// Package files
        #[arg(required = true)]
        paths: Vec<String>,
        /// Rating weights file (JSON)
        #[arg(long, value_name = "FILE", env = "AUDICA_WEIGHTS")]
        weights: Option<String>,
        /// Print a column header line before the rows
        #[arg(long)]
        header: bool,
    },
    /// Show a quick package summary without parsing charts
    Info {
        /// Package file
        path: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the identity hash and weak hash
    Hash {
        /// Package file
        path: String,
    },
    /// Rate the charts of a package
    Rate {
        /// Package file
        path: String,
        /// Only rate this tier (beginner, moderate, advanced, expert or an alias)
        #[arg(long)]
        tier: Option<String>,
        /// Rating weights file (JSON)
        #[arg(long, value_name = "FILE", env = "AUDICA_WEIGHTS")]
        weights: Option<String>,
    },
    /// Decode and re-encode a package
    Export {
        /// Source package
        input: String,
        /// Destination package
        output: String,
        /// Replace the cover image
        #[arg(long, value_name = "FILE")]
        album_art: Option<String>,
    },
}
