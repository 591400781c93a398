//! Card retention for the draw phase.
//!
//! Rules are tried in priority order and the first one that holds anything
//! wins:
//!
//! 1. neighbouring cards of equal rank (every card of each such pair is kept)
//! 2. four or more cards of one suit
//! 3. a run of four consecutive ranks in neighbouring positions
//!
//! Neighbours are taken in dealt order by default, so `2c 9h 2d` is not
//! seen as a pair. [`ScanMode::RankSorted`] compares neighbours after
//! ordering the hand by rank instead.
//!
//! The result is a fresh vector; the input hand is only read.

use drawbot_engine::cards::{Card, Suit};

use crate::config::ScanMode;

/// Which rule decided the holds.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum HoldReason {
    Pair,
    Flush,
    Straight,
    /// Nothing matched; the whole hand is exchanged.
    Nothing,
}

/// Holds for one hand, positionally aligned with it.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct HoldPlan {
    pub held: Vec<bool>,
    pub reason: HoldReason,
}

impl HoldPlan {
    /// `true` for every card to exchange.
    pub fn exchange_flags(&self) -> Vec<bool> {
        self.held.iter().map(|&h| !h).collect()
    }
}

/// Exchange flags for `cards`, `true` meaning "exchange this card".
///
/// ```
/// use drawbot_ai::config::ScanMode;
/// use drawbot_ai::hold::select_exchange;
/// use drawbot_engine::cards::parse_cards;
///
/// let hand = parse_cards("2c 2d 5s 9h Kd").unwrap();
/// assert_eq!(
///     select_exchange(&hand, ScanMode::Adjacent),
///     vec![false, false, true, true, true]
/// );
/// ```
pub fn select_exchange(cards: &[Card], mode: ScanMode) -> Vec<bool> {
    plan_holds(cards, mode).exchange_flags()
}

pub fn plan_holds(cards: &[Card], mode: ScanMode) -> HoldPlan {
    // order[k] is the hand position looked at in k-th place
    let mut order: Vec<usize> = (0..cards.len()).collect();
    if mode == ScanMode::RankSorted {
        order.sort_by_key(|&i| (cards[i].number(), cards[i].suit));
    }
    let view: Vec<Card> = order.iter().map(|&i| cards[i]).collect();
    let mut held = vec![false; cards.len()];

    let reason = if mark_pairs(&view, &order, &mut held) {
        HoldReason::Pair
    } else if mark_flush(cards, &mut held) {
        HoldReason::Flush
    } else if mark_run(&view, &order, &mut held) {
        HoldReason::Straight
    } else {
        HoldReason::Nothing
    };

    HoldPlan { held, reason }
}

fn mark_pairs(view: &[Card], order: &[usize], held: &mut [bool]) -> bool {
    let mut found = false;
    for k in 1..view.len() {
        if view[k].rank == view[k - 1].rank {
            held[order[k]] = true;
            held[order[k - 1]] = true;
            found = true;
        }
    }
    found
}

fn mark_flush(cards: &[Card], held: &mut [bool]) -> bool {
    let mut counts = [0usize; 4];
    for c in cards {
        counts[suit_slot(c.suit)] += 1;
    }
    let Some(suit) = cards.iter().map(|c| c.suit).find(|&s| counts[suit_slot(s)] >= 4) else {
        return false;
    };
    for (slot, c) in held.iter_mut().zip(cards) {
        if c.suit == suit {
            *slot = true;
        }
    }
    true
}

/// Windows of four positions whose host numbers climb by exactly one.
fn mark_run(view: &[Card], order: &[usize], held: &mut [bool]) -> bool {
    let mut found = false;
    for start in 0..view.len().saturating_sub(3) {
        let base = view[start].number();
        let climbs = (1..4).all(|step| view[start + step].number() == base + step as u8);
        if climbs {
            for k in start..start + 4 {
                held[order[k]] = true;
            }
            found = true;
        }
    }
    found
}

fn suit_slot(s: Suit) -> usize {
    match s {
        Suit::Clubs => 0,
        Suit::Diamonds => 1,
        Suit::Hearts => 2,
        Suit::Spades => 3,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use drawbot_engine::cards::parse_cards;

    fn flags(hand: &str) -> Vec<bool> {
        select_exchange(&parse_cards(hand).unwrap(), ScanMode::Adjacent)
    }

    #[test]
    fn adjacent_pair_is_held() {
        assert_eq!(flags("2c 2d 5s 9h Kd"), vec![false, false, true, true, true]);
    }

    #[test]
    fn four_of_a_kind_chain_is_held() {
        assert_eq!(flags("3c 3d 3s 3h 7d"), vec![false, false, false, false, true]);
    }

    #[test]
    fn split_pair_is_missed_in_dealt_order() {
        assert_eq!(flags("2c 9h 2d 5s Kd"), vec![true; 5]);
    }

    #[test]
    fn split_pair_is_found_when_sorted() {
        let hand = parse_cards("2c 9h 2d 5s Kd").unwrap();
        let plan = plan_holds(&hand, ScanMode::RankSorted);
        assert_eq!(plan.reason, HoldReason::Pair);
        assert_eq!(plan.exchange_flags(), vec![false, true, false, true, true]);
    }

    #[test]
    fn pair_outranks_flush_draw() {
        let plan = plan_holds(&parse_cards("4h 4s 8h Jh Kh").unwrap(), ScanMode::Adjacent);
        assert_eq!(plan.reason, HoldReason::Pair);
        assert_eq!(plan.exchange_flags(), vec![false, false, true, true, true]);
    }

    #[test]
    fn four_flush_keeps_suited_cards() {
        let plan = plan_holds(&parse_cards("2h 9h Jh 5s Kh").unwrap(), ScanMode::Adjacent);
        assert_eq!(plan.reason, HoldReason::Flush);
        assert_eq!(plan.exchange_flags(), vec![false, false, false, true, false]);
    }

    #[test]
    fn run_of_four_is_held() {
        let plan = plan_holds(&parse_cards("Kd 5c 6d 7h 8s").unwrap(), ScanMode::Adjacent);
        assert_eq!(plan.reason, HoldReason::Straight);
        assert_eq!(plan.exchange_flags(), vec![true, false, false, false, false]);
    }

    fn wire_hand(numbers: [u8; 5]) -> Vec<Card> {
        let suits = ["clubs", "diamonds", "spades", "hearts", "diamonds"];
        let json: Vec<String> = numbers
            .iter()
            .zip(suits)
            .map(|(n, s)| format!(r#"{{"suit":"{}","number":{}}}"#, s, n))
            .collect();
        serde_json::from_str(&format!("[{}]", json.join(","))).unwrap()
    }

    #[test]
    fn run_follows_host_ace_numbering() {
        let low = wire_hand([1, 2, 3, 4, 9]);
        assert_eq!(
            select_exchange(&low, ScanMode::Adjacent),
            vec![false, false, false, false, true]
        );
        assert_eq!(plan_holds(&low, ScanMode::RankSorted).reason, HoldReason::Straight);

        let high = wire_hand([14, 2, 3, 4, 9]);
        assert_eq!(select_exchange(&high, ScanMode::Adjacent), vec![true; 5]);
    }

    #[test]
    fn descending_run_is_not_a_run() {
        assert_eq!(flags("8s 7h 6d 5c Kd"), vec![true; 5]);
    }

    #[test]
    fn short_hands_do_not_overrun() {
        assert_eq!(flags("5c 6d 7h 8s"), vec![false; 4]);
        assert_eq!(flags("5c 6d 7h"), vec![true; 3]);
        assert!(flags("").is_empty());
    }

    #[test]
    fn repeated_calls_agree() {
        let hand = parse_cards("Qs 4d 4c Ah 9c").unwrap();
        let first = select_exchange(&hand, ScanMode::Adjacent);
        let second = select_exchange(&hand, ScanMode::Adjacent);
        assert_eq!(first, second);
        assert_eq!(hand, parse_cards("Qs 4d 4c Ah 9c").unwrap());
    }
}
