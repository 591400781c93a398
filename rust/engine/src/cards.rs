use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CardParseError;

/// Represents one of the four suits in a standard 52-card deck.
/// Used as a component of [`Card`] to fully define a playing card.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    /// Clubs suit (♣)
    #[serde(alias = "club", alias = "c")]
    Clubs,
    /// Diamonds suit (♦)
    #[serde(alias = "diamond", alias = "d")]
    Diamonds,
    /// Hearts suit (♥)
    #[serde(alias = "heart", alias = "h")]
    Hearts,
    /// Spades suit (♠)
    #[serde(alias = "spade", alias = "s")]
    Spades,
}

impl Suit {
    pub fn symbol(self) -> char {
        match self {
            Suit::Clubs => 'c',
            Suit::Diamonds => 'd',
            Suit::Hearts => 'h',
            Suit::Spades => 's',
        }
    }

    fn from_symbol(c: char) -> Option<Suit> {
        match c.to_ascii_lowercase() {
            'c' | '♣' => Some(Suit::Clubs),
            'd' | '♦' => Some(Suit::Diamonds),
            'h' | '♥' => Some(Suit::Hearts),
            's' | '♠' => Some(Suit::Spades),
            _ => None,
        }
    }
}

/// Represents the rank (face value) of a playing card from Two through Ace.
///
/// On the wire a rank is its number (`2..=14`); hosts that number the Ace
/// as `1` are accepted as well.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Rank {
    /// Rank 2
    Two = 2,
    /// Rank 3
    Three,
    /// Rank 4
    Four,
    /// Rank 5
    Five,
    /// Rank 6
    Six,
    /// Rank 7
    Seven,
    /// Rank 8
    Eight,
    /// Rank 9
    Nine,
    /// Rank 10
    Ten,
    /// Jack (11)
    Jack,
    /// Queen (12)
    Queen,
    /// King (13)
    King,
    /// Ace (14)
    Ace,
}

impl Rank {
    /// The ordinal used for adjacency and sequence comparisons.
    pub fn number(self) -> u8 {
        self as u8
    }

    fn symbol(self) -> char {
        match self {
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
            r => char::from(b'0' + r.number()),
        }
    }
}

impl TryFrom<u8> for Rank {
    type Error = CardParseError;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        Ok(match v {
            2 => Rank::Two,
            3 => Rank::Three,
            4 => Rank::Four,
            5 => Rank::Five,
            6 => Rank::Six,
            7 => Rank::Seven,
            8 => Rank::Eight,
            9 => Rank::Nine,
            10 => Rank::Ten,
            11 => Rank::Jack,
            12 => Rank::Queen,
            13 => Rank::King,
            1 | 14 => Rank::Ace,
            other => return Err(CardParseError::InvalidRank(other.to_string())),
        })
    }
}

impl From<Rank> for u8 {
    fn from(r: Rank) -> u8 {
        r.number()
    }
}

/// Represents a single playing card with a suit and rank.
///
/// Cards are plain values: nothing is ever attached to a card while an
/// agent reasons about it. A host that numbers the Ace `1` gets its own
/// numbering back from [`Card::number`] and on serialization.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "WireCard", into = "WireCard")]
pub struct Card {
    /// The suit of the card (Clubs, Diamonds, Hearts, or Spades)
    pub suit: Suit,
    /// The rank of the card (Two through Ace)
    pub rank: Rank,
    ace_low: bool,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self {
            suit,
            rank,
            ace_low: false,
        }
    }

    /// Builds a card from a host number, `1` or `14` for the Ace.
    pub fn from_number(number: u8, suit: Suit) -> Result<Self, CardParseError> {
        Ok(Self {
            suit,
            rank: Rank::try_from(number)?,
            ace_low: number == 1,
        })
    }

    /// The host's number for this card, used for run checks.
    pub fn number(&self) -> u8 {
        if self.ace_low { 1 } else { self.rank.number() }
    }
}

#[derive(Serialize, Deserialize)]
struct WireCard {
    suit: Suit,
    number: u8,
}

impl TryFrom<WireCard> for Card {
    type Error = CardParseError;

    fn try_from(w: WireCard) -> Result<Self, Self::Error> {
        Card::from_number(w.number, w.suit)
    }
}

impl From<Card> for WireCard {
    fn from(c: Card) -> Self {
        WireCard {
            suit: c.suit,
            number: c.number(),
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.symbol(), self.suit.symbol())
    }
}

/// Parses short notation such as `"2c"`, `"Td"`, `"10h"` or `"A♠"`.
impl FromStr for Card {
    type Err = CardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let suit_char = chars
            .next_back()
            .ok_or_else(|| CardParseError::InvalidCard(s.to_string()))?;
        let rank_part = chars.as_str();
        if rank_part.is_empty() {
            return Err(CardParseError::InvalidCard(s.to_string()));
        }
        let suit = Suit::from_symbol(suit_char)
            .ok_or_else(|| CardParseError::InvalidSuit(suit_char.to_string()))?;
        let rank = match rank_part.to_ascii_uppercase().as_str() {
            "T" | "10" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            "A" => Rank::Ace,
            digits => {
                let n: u8 = digits
                    .parse()
                    .map_err(|_| CardParseError::InvalidRank(digits.to_string()))?;
                return Card::from_number(n, suit);
            }
        };
        Ok(Card::new(rank, suit))
    }
}

/// Parses a hand written as whitespace- or comma-separated cards.
///
/// ```
/// use drawbot_engine::cards::{parse_cards, Rank, Suit};
///
/// let hand = parse_cards("2c 2d,5s 9h Kd").unwrap();
/// assert_eq!(hand.len(), 5);
/// assert_eq!(hand[4].rank, Rank::King);
/// assert_eq!(hand[4].suit, Suit::Diamonds);
/// ```
pub fn parse_cards(s: &str) -> Result<Vec<Card>, CardParseError> {
    s.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .map(str::parse)
        .collect()
}

pub fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
