//! Single-decision command: load one snapshot, ask one seat for its bet.

use crate::config;
use crate::error::CliError;
use drawbot_ai::betting::BetDecision;
use drawbot_ai::create_agent;
use drawbot_engine::game::GameInfo;
use std::io::Write;
use std::path::Path;

/// Decides a bet for `name` in the snapshot stored at `input`.
///
/// The agent sees `start` and then `bet` on the same snapshot, so its bet
/// unit is in place before deciding.
pub fn handle_bet_command(
    input: &str,
    name: &str,
    kind: &str,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let data = read_snapshot(Path::new(input))?;
    if data.player(name).is_none() {
        return Err(CliError::InvalidInput(format!(
            "no seat named '{}' in {}",
            name, input
        )));
    }

    let mut agent = create_agent(kind, input, name, config::load()?)?;
    agent.start(&data);
    let amount = agent.bet(&data);
    writeln!(
        out,
        "Decision: {} ({})",
        amount,
        BetDecision::from(amount)
    )?;
    Ok(())
}

fn read_snapshot(path: &Path) -> Result<GameInfo, CliError> {
    let text = std::fs::read_to_string(path)?;
    Ok(GameInfo::from_json(&text)?)
}
