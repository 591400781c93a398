//! # drawbot-engine: Five-Card Draw Table Model
//!
//! The host-facing half of the drawbot workspace: the card model, a
//! five-card hand evaluator, and the read-only game snapshot an agent
//! receives at each phase of a round.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and short notation parsing
//! - [`hand`] - Five-card hand evaluation and strength tiers
//! - [`game`] - Game snapshots (`GameInfo`) in the host's JSON format
//! - [`errors`] - Error types for parsing cards and snapshots
//!
//! ## Quick Start
//!
//! ```rust
//! use drawbot_engine::cards::parse_cards;
//! use drawbot_engine::hand::{hand_value, evaluate_hand, Category};
//!
//! let hand = parse_cards("2c 2d 5s 9h Kd").unwrap();
//! let strength = evaluate_hand(&hand).unwrap();
//! assert_eq!(strength.category, Category::OnePair);
//! assert_eq!(hand_value(&hand), 2);
//! ```
//!
//! ## Snapshots
//!
//! ```rust
//! use drawbot_engine::game::{GameInfo, Phase};
//!
//! let info = GameInfo::from_json(
//!     r#"{"phase":"draw","currentRound":1,"players":{}}"#,
//! ).unwrap();
//! assert_eq!(info.phase, Phase::Draw);
//! assert_eq!(info.min_bet_point, 0);
//! ```

pub mod cards;
pub mod errors;
pub mod game;
pub mod hand;
