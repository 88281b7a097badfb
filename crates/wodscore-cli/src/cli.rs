//! CLI argument definitions for wodscore.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "wodscore")]
#[command(about = "Workout score encoding and leaderboard ranking", version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Encode an entered score (e.g. "12:34", "5+12", "225 lbs") into its canonical value
    Encode {
        /// Score as entered
        raw: String,
        /// Scheme id (time, rounds-reps, load, ...)
        #[arg(long, short)]
        scheme: String,
        /// Loads without a unit are kilograms
        #[arg(long)]
        kg: bool,
    },
    /// Format a canonical value for display
    Decode {
        /// Canonical value
        #[arg(allow_hyphen_values = true)]
        value: i64,
        /// Scheme id
        #[arg(long, short)]
        scheme: String,
        /// Append the unit suffix
        #[arg(long)]
        unit: bool,
        /// Show loads in kilograms
        #[arg(long)]
        kg: bool,
    },
    /// Placement points for a place
    Points {
        /// 1-indexed place
        #[arg(long, allow_hyphen_values = true)]
        place: i64,
        /// Points for first place
        #[arg(long, default_value = "100")]
        first: i64,
        /// Points deducted per place
        #[arg(long, default_value = "5")]
        step: i64,
        /// Use online scoring (points equal place)
        #[arg(long)]
        online: bool,
    },
    /// Convert between the legacy and canonical encodings
    Legacy {
        /// Value to convert
        value: f64,
        /// Scheme id
        #[arg(long, short)]
        scheme: String,
        /// Convert canonical to legacy instead
        #[arg(long)]
        reverse: bool,
        /// Legacy value uses "rounds.reps" decimal notation
        #[arg(long)]
        fractional: bool,
    },
    /// Rank an event's scores into a leaderboard
    Rank {
        /// JSON file with an array of score entries
        #[arg(long, value_name = "FILE")]
        scores: String,
        /// Scheme id
        #[arg(long, short)]
        scheme: String,
        /// TOML scoring configuration
        #[arg(long, value_name = "FILE")]
        config: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
