//! Command-line argument definitions.

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "drawbot",
    version,
    about = "Drive a five-card-draw seat agent from the command line"
)]
pub struct DrawbotCli {
    /// Print agent traces to stderr (overridden by RUST_LOG)
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the resolved policy configuration and where each value came from
    Cfg,
    /// Classify a five-card hand
    Eval {
        /// Cards such as "2c 2d 5s 9h Kd"
        #[arg(long)]
        cards: String,
    },
    /// Show which cards the standard agent would exchange
    Draw {
        #[arg(long)]
        cards: String,
        /// adjacent | rank_sorted (defaults to the configured mode)
        #[arg(long)]
        scan_mode: Option<String>,
    },
    /// Decide a bet for one seat of a JSON game snapshot
    Bet {
        #[arg(long)]
        input: String,
        /// Seat to decide for
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "standard")]
        kind: String,
    },
    /// Drive one agent through a JSON-lines stream of snapshots
    Replay {
        #[arg(long)]
        input: String,
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "standard")]
        kind: String,
    },
}
