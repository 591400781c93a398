use std::cmp::Ordering;
use std::fmt;

use crate::cards::{Card, Suit};

/// Number of cards in a five-card-draw hand.
pub const HAND_SIZE: usize = 5;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl Category {
    /// Ordinal strength consumed by betting policies.
    ///
    /// High card is tier 1, so every tier `<= 1` means "no made hand".
    pub fn tier(self) -> u8 {
        self as u8 + 1
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct HandStrength {
    pub category: Category,
    // kickers: ordered high -> low for tiebreaks
    pub kickers: [u8; 5],
}

impl PartialOrd for HandStrength {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HandStrength {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.category.cmp(&other.category) {
            Ordering::Equal => self.kickers.cmp(&other.kickers),
            ord => ord,
        }
    }
}

/// Evaluates a five-card hand.
///
/// Returns `None` unless exactly [`HAND_SIZE`] cards are given.
///
/// ```
/// use drawbot_engine::cards::parse_cards;
/// use drawbot_engine::hand::{evaluate_hand, Category};
///
/// let hand = parse_cards("9c Td Jh Qs Kd").unwrap();
/// let strength = evaluate_hand(&hand).unwrap();
/// assert_eq!(strength.category, Category::Straight);
/// assert_eq!(strength.category.tier(), 5);
/// ```
pub fn evaluate_hand(cards: &[Card]) -> Option<HandStrength> {
    if cards.len() != HAND_SIZE {
        return None;
    }

    let mut rank_counts = [0u8; 15]; // 2..14 used
    let mut suit_counts = [0u8; 4];
    for c in cards {
        rank_counts[c.rank.number() as usize] += 1;
        suit_counts[suit_index(c.suit)] += 1;
    }

    let flush = suit_counts.iter().any(|&n| n as usize == HAND_SIZE);
    let straight = detect_straight_high(&rank_counts);
    let mut desc: Vec<u8> = cards.iter().map(|c| c.rank.number()).collect();
    desc.sort_unstable_by(|a, b| b.cmp(a));

    if let (true, Some(high)) = (flush, straight) {
        return Some(HandStrength {
            category: Category::StraightFlush,
            kickers: [high, 0, 0, 0, 0],
        });
    }

    let groups = group_by_count(&rank_counts);
    let shape: Vec<u8> = groups.iter().map(|&(count, _)| count).collect();

    let category = match shape.as_slice() {
        [4, ..] => Category::FourOfAKind,
        [3, 2] => Category::FullHouse,
        _ if flush => Category::Flush,
        _ if straight.is_some() => Category::Straight,
        [3, ..] => Category::ThreeOfAKind,
        [2, 2, ..] => Category::TwoPair,
        [2, ..] => Category::OnePair,
        _ => Category::HighCard,
    };

    let kickers = match category {
        Category::Straight => [straight.unwrap_or(0), 0, 0, 0, 0],
        Category::Flush | Category::HighCard => {
            let mut k = [0u8; 5];
            k.copy_from_slice(&desc);
            k
        }
        _ => {
            // grouped ranks first (by size, then rank), remaining singles after
            let mut k = [0u8; 5];
            for (slot, &(_, rank)) in k.iter_mut().zip(groups.iter()) {
                *slot = rank;
            }
            k
        }
    };

    Some(HandStrength { category, kickers })
}

/// Tier of a hand for policy decisions; malformed hands score `0`.
pub fn hand_value(cards: &[Card]) -> u8 {
    evaluate_hand(cards).map_or(0, |s| s.category.tier())
}

fn suit_index(s: Suit) -> usize {
    match s {
        Suit::Clubs => 0,
        Suit::Diamonds => 1,
        Suit::Hearts => 2,
        Suit::Spades => 3,
    }
}

fn detect_straight_high(rank_counts: &[u8; 15]) -> Option<u8> {
    if rank_counts.iter().any(|&n| n > 1) {
        return None;
    }
    let present: Vec<u8> = (2..=14u8).filter(|&r| rank_counts[r as usize] == 1).collect();
    let (low, high) = (*present.first()?, *present.last()?);
    if high - low == 4 {
        return Some(high);
    }
    // Ace-low wheel: A-2-3-4-5
    if present == [2, 3, 4, 5, 14] {
        return Some(5);
    }
    None
}

/// `(count, rank)` pairs ordered by count then rank, both descending.
fn group_by_count(rank_counts: &[u8; 15]) -> Vec<(u8, u8)> {
    let mut groups: Vec<(u8, u8)> = (2..=14u8)
        .filter(|&r| rank_counts[r as usize] > 0)
        .map(|r| (rank_counts[r as usize], r))
        .collect();
    groups.sort_unstable_by(|a, b| b.cmp(a));
    groups
}
