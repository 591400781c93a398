use drawbot_engine::cards::{Card, Rank as R, Suit as S};
use drawbot_engine::hand::{Category, evaluate_hand, hand_value};

fn c(s: S, r: R) -> Card {
    Card::new(r, s)
}

#[test]
fn detects_royal_flush() {
    let cards = [
        c(S::Hearts, R::Ten),
        c(S::Hearts, R::Jack),
        c(S::Hearts, R::Queen),
        c(S::Hearts, R::King),
        c(S::Hearts, R::Ace),
    ];
    let hs = evaluate_hand(&cards).unwrap();
    assert_eq!(hs.category, Category::StraightFlush);
    assert_eq!(hs.kickers[0], 14);
}

#[test]
fn category_ordering_is_correct() {
    // Four of a kind vs full house
    let quads = [
        c(S::Clubs, R::Ace),
        c(S::Diamonds, R::Ace),
        c(S::Hearts, R::Ace),
        c(S::Spades, R::Ace),
        c(S::Clubs, R::King),
    ];
    let full_house = [
        c(S::Clubs, R::King),
        c(S::Diamonds, R::King),
        c(S::Hearts, R::King),
        c(S::Clubs, R::Queen),
        c(S::Diamonds, R::Queen),
    ];
    let a = evaluate_hand(&quads).unwrap();
    let b = evaluate_hand(&full_house).unwrap();
    assert_eq!(a.category, Category::FourOfAKind);
    assert_eq!(b.category, Category::FullHouse);
    assert!(a > b);
}

#[test]
fn straight_beats_three_of_a_kind() {
    let straight = [
        c(S::Clubs, R::Five),
        c(S::Hearts, R::Six),
        c(S::Clubs, R::Seven),
        c(S::Hearts, R::Eight),
        c(S::Diamonds, R::Nine),
    ];
    let trips = [
        c(S::Clubs, R::Queen),
        c(S::Hearts, R::Queen),
        c(S::Diamonds, R::Queen),
        c(S::Spades, R::Two),
        c(S::Clubs, R::Three),
    ];
    let a = evaluate_hand(&straight).unwrap();
    let b = evaluate_hand(&trips).unwrap();
    assert_eq!(b.category, Category::ThreeOfAKind);
    assert!(a > b);
}

#[test]
fn flush_beats_straight_and_is_detected() {
    let flush = [
        c(S::Hearts, R::Two),
        c(S::Hearts, R::Seven),
        c(S::Hearts, R::Jack),
        c(S::Hearts, R::Queen),
        c(S::Hearts, R::Nine),
    ];
    let straight = [
        c(S::Clubs, R::Five),
        c(S::Hearts, R::Six),
        c(S::Clubs, R::Seven),
        c(S::Hearts, R::Eight),
        c(S::Diamonds, R::Nine),
    ];
    let a = evaluate_hand(&flush).unwrap();
    assert_eq!(a.category, Category::Flush);
    let b = evaluate_hand(&straight).unwrap();
    assert!(a > b);
}

#[test]
fn pair_vs_high_card() {
    let pair = [
        c(S::Clubs, R::Ace),
        c(S::Hearts, R::Ace),
        c(S::Spades, R::Two),
        c(S::Diamonds, R::Three),
        c(S::Clubs, R::Four),
    ];
    let high = [
        c(S::Clubs, R::Ace),
        c(S::Hearts, R::King),
        c(S::Spades, R::Nine),
        c(S::Diamonds, R::Eight),
        c(S::Clubs, R::Seven),
    ];
    let a = evaluate_hand(&pair).unwrap();
    let b = evaluate_hand(&high).unwrap();
    assert!(a > b);
}

#[test]
fn kickers_break_ties_within_category() {
    let kings_ace = [
        c(S::Clubs, R::King),
        c(S::Hearts, R::King),
        c(S::Spades, R::Ace),
        c(S::Diamonds, R::Three),
        c(S::Clubs, R::Four),
    ];
    let kings_queen = [
        c(S::Diamonds, R::King),
        c(S::Spades, R::King),
        c(S::Spades, R::Queen),
        c(S::Hearts, R::Three),
        c(S::Hearts, R::Four),
    ];
    let a = evaluate_hand(&kings_ace).unwrap();
    let b = evaluate_hand(&kings_queen).unwrap();
    assert_eq!(a.category, b.category);
    assert!(a > b);
}

#[test]
fn tiers_follow_category_order() {
    let tiers: Vec<u8> = [
        Category::HighCard,
        Category::OnePair,
        Category::TwoPair,
        Category::ThreeOfAKind,
        Category::Straight,
        Category::Flush,
        Category::FullHouse,
        Category::FourOfAKind,
        Category::StraightFlush,
    ]
    .iter()
    .map(|c| c.tier())
    .collect();
    assert_eq!(tiers, (1..=9).collect::<Vec<u8>>());
}

#[test]
fn hand_value_matches_category_tier() {
    let two_pair = [
        c(S::Clubs, R::Four),
        c(S::Hearts, R::Four),
        c(S::Spades, R::Nine),
        c(S::Diamonds, R::Nine),
        c(S::Clubs, R::Jack),
    ];
    assert_eq!(hand_value(&two_pair), 3);
    assert_eq!(hand_value(&two_pair[..4]), 0);
}
