//! Hand classification command.

use crate::error::CliError;
use drawbot_engine::cards::{format_cards, parse_cards};
use drawbot_engine::hand::{HAND_SIZE, evaluate_hand};
use std::io::Write;

/// Prints the category and policy tier of a five-card hand.
pub fn handle_eval_command(cards: &str, out: &mut dyn Write) -> Result<(), CliError> {
    let hand = parse_cards(cards)?;
    let strength = evaluate_hand(&hand).ok_or_else(|| {
        CliError::InvalidInput(format!(
            "expected {} cards, got {}",
            HAND_SIZE,
            hand.len()
        ))
    })?;

    writeln!(out, "Hand: {}", format_cards(&hand))?;
    writeln!(out, "Category: {}", strength.category)?;
    writeln!(out, "Tier: {}", strength.category.tier())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eval_reports_category_and_tier() {
        let mut out = Vec::new();
        handle_eval_command("5c 6d 7s 8h 9d", &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Category: Straight"));
        assert!(output.contains("Tier: 5"));
    }

    #[test]
    fn test_eval_rejects_short_hand() {
        let mut out = Vec::new();
        let result = handle_eval_command("5c 6d 7s", &mut out);
        assert!(matches!(result, Err(CliError::InvalidInput(msg)) if msg.contains("got 3")));
        assert!(out.is_empty());
    }
}
