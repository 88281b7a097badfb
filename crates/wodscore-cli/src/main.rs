mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Command};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    // RUST_LOG overrides; warn by default
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("wodscore=warn,wodscore_core=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match args.command {
        Command::Encode { raw, scheme, kg } => commands::encode::run(&raw, &scheme, kg),
        Command::Decode {
            value,
            scheme,
            unit,
            kg,
        } => commands::decode::run(value, &scheme, unit, kg),
        Command::Points {
            place,
            first,
            step,
            online,
        } => commands::points::run(place, first, step, online),
        Command::Legacy {
            value,
            scheme,
            reverse,
            fractional,
        } => commands::legacy::run(value, &scheme, reverse, fractional),
        Command::Rank {
            scores,
            scheme,
            config,
            json,
        } => commands::rank::run(&scores, &scheme, config.as_deref(), json),
    }
}
