mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Command};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("audica=info,audica_core=info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match args.command {
        Command::Metadata {
            paths,
            weights,
            header,
        } => commands::metadata::run(&paths, weights.as_deref(), header),
        Command::Info { path, json } => commands::info::run(&path, json),
        Command::Hash { path } => commands::hash::run(&path),
        Command::Rate {
            path,
            tier,
            weights,
        } => commands::rate::run(&path, tier.as_deref(), weights.as_deref()),
        Command::Export {
            input,
            output,
            album_art,
        } => commands::export::run(&input, &output, album_art.as_deref()),
    }
}
