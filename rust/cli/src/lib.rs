//! # drawbot CLI Library
//!
//! Command-line front end for the five-card-draw seat agents. It inspects
//! hands, previews exchanges, asks an agent for a single bet, and replays
//! recorded snapshot streams through an agent.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line arguments
//! and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```
//! let mut out = Vec::new();
//! let mut err = Vec::new();
//! let args = vec!["drawbot", "eval", "--cards", "Ah Kh Qh Jh Th"];
//! let code = drawbot_cli::run(args, &mut out, &mut err);
//! assert_eq!(code, 0);
//! assert!(String::from_utf8(out).unwrap().contains("Straight Flush"));
//! ```
//!
//! ## Available Subcommands
//!
//! - `cfg`: Display the resolved policy configuration
//! - `eval`: Classify a five-card hand
//! - `draw`: Show which cards the standard agent exchanges
//! - `bet`: Decide a bet for one seat of a JSON snapshot
//! - `replay`: Drive an agent through a JSON-lines snapshot stream

use clap::Parser;
use std::io::Write;
pub mod cli;
mod commands;
mod config;
mod error;
mod exit_code;
mod logging;
pub mod ui;

use cli::{Commands, DrawbotCli};

use commands::{
    handle_bet_command, handle_cfg_command, handle_draw_command, handle_eval_command,
    handle_replay_command,
};

pub use error::CliError;

/// Subcommand names listed in the usage hint after a parse error.
pub const COMMANDS: &[&str] = &["cfg", "eval", "draw", "bet", "replay"];

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate subcommand handler.
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
///
/// # Available Commands
///
/// - `cfg`: Display configuration settings
/// - `eval --cards CARDS`: Category and tier of a hand
/// - `draw --cards CARDS [--scan-mode MODE]`: Exchange preview
/// - `bet --input FILE --name SEAT [--kind KIND]`: One betting decision
/// - `replay --input FILE --name SEAT [--kind KIND]`: Replay a snapshot stream
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match DrawbotCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => return report_parse_error(e, out, err),
    };

    logging::init_logging(cli.verbose);
    tracing::debug!(command = ?cli.cmd, "dispatching");

    let result = match cli.cmd {
        Commands::Cfg => handle_cfg_command(out, err),
        Commands::Eval { cards } => handle_eval_command(&cards, out),
        Commands::Draw { cards, scan_mode } => {
            handle_draw_command(&cards, scan_mode.as_deref(), out)
        }
        Commands::Bet { input, name, kind } => handle_bet_command(&input, &name, &kind, out),
        Commands::Replay { input, name, kind } => {
            handle_replay_command(&input, &name, &kind, out, err)
        }
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}

fn report_parse_error(e: clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    use clap::error::ErrorKind;

    // Help and version should print to stdout and exit 0
    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            if write!(out, "{}", e).is_err() {
                return exit_code::ERROR;
            }
            exit_code::SUCCESS
        }
        _ => {
            if writeln!(err, "{}", e).is_err()
                || writeln!(err).is_err()
                || writeln!(err, "Usage: drawbot <command> [options]\n").is_err()
                || writeln!(err, "Commands:").is_err()
            {
                return exit_code::ERROR;
            }
            for c in COMMANDS {
                if writeln!(err, "  {}", c).is_err() {
                    return exit_code::ERROR;
                }
            }
            let _ = writeln!(err, "\nFor full help, run: drawbot --help");
            exit_code::ERROR
        }
    }
}
