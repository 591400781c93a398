//! Replay command: drive one agent through a recorded stream of snapshots.
//!
//! The input holds one JSON game snapshot per line. Each line is routed to
//! the hook matching its phase, and every answer is printed as it is made.
//! Blank lines are skipped.

use crate::config;
use crate::error::CliError;
use crate::ui;
use crate::ui::format_flags;
use drawbot_ai::betting::BetDecision;
use drawbot_ai::create_agent;
use drawbot_engine::game::{GameInfo, Phase};
use std::io::Write;

pub fn handle_replay_command(
    input: &str,
    name: &str,
    kind: &str,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let text = std::fs::read_to_string(input)?;
    let snapshots = GameInfo::from_json_lines(&text)?;
    if snapshots.is_empty() {
        ui::display_warning(err, &format!("{} holds no snapshots", input))?;
    }

    let mut agent = create_agent(kind, input, name, config::load()?)?;
    for data in &snapshots {
        let round = data.current_round;
        match data.phase {
            Phase::Start => {
                agent.start(data);
                writeln!(out, "[{}] {}: start", round, data.phase)?;
            }
            Phase::Bet1 | Phase::Bet2 => {
                let amount = agent.bet(data);
                writeln!(
                    out,
                    "[{}] {}: bet {} ({})",
                    round,
                    data.phase,
                    amount,
                    BetDecision::from(amount)
                )?;
            }
            Phase::Draw => {
                let flags = agent.draw(data);
                writeln!(out, "[{}] {}: exchange {}", round, data.phase, format_flags(&flags))?;
            }
            Phase::End => {
                agent.end(data);
                writeln!(
                    out,
                    "[{}] {}: winner {}",
                    round,
                    data.phase,
                    data.winner.as_deref().unwrap_or("none")
                )?;
            }
        }
    }

    let summary = serde_json::to_string(&agent.test()).map_err(std::io::Error::other)?;
    writeln!(out, "{}", summary)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write as _;

    fn line(phase: &str, min_bet: i64, cards: &str, winner: Option<&str>) -> String {
        let cards: Vec<String> = cards
            .split(',')
            .map(|c| {
                let (suit, n) = c.split_once(':').unwrap();
                format!(r#"{{"suit":"{}","number":{}}}"#, suit, n)
            })
            .collect();
        let winner = winner.map_or("null".to_string(), |w| format!("\"{}\"", w));
        format!(
            r#"{{"phase":"{}","minBetPoint":{},"currentRound":1,"winner":{},"players":{{"me":{{"name":"me","point":10000,"status":"active","round":{{"betPoint":0,"cards":[{}]}}}}}}}}"#,
            phase,
            min_bet,
            winner,
            cards.join(",")
        )
    }

    #[test]
    #[serial]
    fn test_replay_walks_a_round() {
        let pair = "clubs:2,diamonds:2,spades:5,hearts:9,diamonds:13";
        let two_pair = "clubs:2,diamonds:2,spades:5,hearts:5,diamonds:13";
        let stream = [
            line("start", 0, pair, None),
            line("bet-1", 0, pair, None),
            line("draw", 0, pair, None),
            String::new(),
            line("bet-2", 100, two_pair, None),
            line("end", 100, two_pair, Some("me")),
        ]
        .join("\n");
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(stream.as_bytes()).unwrap();

        let mut out = Vec::new();
        let mut err = Vec::new();
        handle_replay_command(file.path().to_str().unwrap(), "me", "standard", &mut out, &mut err)
            .unwrap();

        let output = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "[1] start: start");
        assert_eq!(lines[1], "[1] bet-1: bet 0 (check/call)");
        assert_eq!(lines[2], "[1] draw: exchange [. . x x x]");
        assert_eq!(lines[3], "[1] bet-2: bet 0 (check/call)");
        assert_eq!(lines[4], "[1] end: winner me");
        let summary: serde_json::Value = serde_json::from_str(lines[5]).unwrap();
        assert_eq!(summary["win"], 1);
        assert_eq!(summary["betUnit"], 1);
    }

    #[test]
    fn test_replay_reports_bad_line() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{\"phase\":\"start\",\"currentRound\":1,\"players\":{}}\nnot json\n")
            .unwrap();
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result =
            handle_replay_command(file.path().to_str().unwrap(), "me", "standard", &mut out, &mut err);
        match result {
            Err(CliError::Snapshot(e)) => assert!(e.to_string().contains("line 2")),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
