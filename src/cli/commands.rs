//! CLI command definitions and argument parsing

use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;

#[derive(Parser)]
#[command(name = "postpulse")]
#[command(about = "Engagement prediction from historical engagement/follower ratios")]
#[command(version)]
pub struct Cli {
    /// Enable verbose debug logging (default: info level)
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Train on the labeled set and write predictions for the holdout set
    Predict {
        /// Labeled training CSV (defaults to the configured path)
        #[arg(short, long)]
        training: Option<PathBuf>,
        /// Unlabeled holdout CSV (defaults to the configured path)
        #[arg(long)]
        holdout: Option<PathBuf>,
        /// Destination for the scored holdout CSV
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Score the training set against itself and report MAPE
    Evaluate {
        /// Labeled training CSV (defaults to the configured path)
        #[arg(short, long)]
        training: Option<PathBuf>,
    },
    /// Print the aggregated ratio tables and most frequent keywords
    Stats {
        /// Labeled training CSV (defaults to the configured path)
        #[arg(short, long)]
        training: Option<PathBuf>,
        /// Number of keywords to show
        #[arg(long, default_value = "20")]
        top: usize,
        /// Emit machine-readable JSON instead of tables
        #[arg(long)]
        json: bool,
    },
}
