//! Exchange preview command.

use crate::config;
use crate::error::CliError;
use crate::ui::format_flags;
use drawbot_ai::config::ScanMode;
use drawbot_ai::hold::plan_holds;
use drawbot_engine::cards::{format_cards, parse_cards};
use std::io::Write;

/// Shows which cards the standard agent keeps and which it exchanges.
///
/// `scan_mode` overrides the configured mode when given.
pub fn handle_draw_command(
    cards: &str,
    scan_mode: Option<&str>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let hand = parse_cards(cards)?;
    let mode = match scan_mode {
        Some(m) => m
            .parse::<ScanMode>()
            .map_err(|e| CliError::InvalidInput(e.to_string()))?,
        None => config::load()?.scan_mode,
    };

    let plan = plan_holds(&hand, mode);
    let flags = plan.exchange_flags();
    let exchanged: Vec<_> = hand
        .iter()
        .zip(&flags)
        .filter(|(_, swap)| **swap)
        .map(|(c, _)| *c)
        .collect();

    writeln!(out, "Hand: {}", format_cards(&hand))?;
    writeln!(out, "Scan: {}", mode.as_str())?;
    writeln!(out, "Hold rule: {:?}", plan.reason)?;
    writeln!(out, "Exchange: {}", format_flags(&flags))?;
    writeln!(out, "Discard: {}", format_cards(&exchanged))?;
    Ok(())
}
