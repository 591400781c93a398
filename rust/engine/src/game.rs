//! Read-only game snapshots handed to agents at every phase boundary.
//!
//! The host owns the table; agents only ever see a [`GameInfo`] by shared
//! reference. Field names follow the host's camelCase JSON.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::SnapshotError;

/// Named stage of a round.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Phase {
    #[serde(rename = "start")]
    Start,
    /// First betting round, before the exchange.
    #[serde(rename = "bet-1")]
    Bet1,
    #[serde(rename = "draw")]
    Draw,
    /// Second betting round, after the exchange.
    #[serde(rename = "bet-2")]
    Bet2,
    #[serde(rename = "end")]
    End,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Start => "start",
            Phase::Bet1 => "bet-1",
            Phase::Draw => "draw",
            Phase::Bet2 => "bet-2",
            Phase::End => "end",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlayerStatus {
    Active,
    /// Dropped out of the current round.
    #[serde(alias = "fold", alias = "folded")]
    Drop,
    AllIn,
}

impl fmt::Display for PlayerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PlayerStatus::Active => "active",
            PlayerStatus::Drop => "drop",
            PlayerStatus::AllIn => "all-in",
        })
    }
}

/// A player's commitments and cards within the current round.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundState {
    /// Points already committed this round.
    #[serde(default)]
    pub bet_point: i64,
    #[serde(default)]
    pub cards: Vec<Card>,
    /// Descriptive hand label supplied by the host (e.g. at showdown).
    #[serde(default)]
    pub hand: Option<String>,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerInfo {
    pub name: String,
    /// Remaining stack.
    pub point: i64,
    pub status: PlayerStatus,
    #[serde(default)]
    pub round: RoundState,
}

/// Snapshot of the table passed to every lifecycle hook.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameInfo {
    pub phase: Phase,
    #[serde(default)]
    pub pot: i64,
    /// Highest cumulative bet any active player has committed this phase.
    #[serde(default)]
    pub min_bet_point: i64,
    pub current_round: u32,
    #[serde(default)]
    pub winner: Option<String>,
    pub players: BTreeMap<String, PlayerInfo>,
}

impl GameInfo {
    pub fn from_json(s: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Parses one snapshot per non-blank line.
    pub fn from_json_lines(s: &str) -> Result<Vec<Self>, SnapshotError> {
        s.lines()
            .enumerate()
            .filter(|(_, l)| !l.trim().is_empty())
            .map(|(i, l)| {
                serde_json::from_str(l).map_err(|source| SnapshotError::Line {
                    line: i + 1,
                    source,
                })
            })
            .collect()
    }

    pub fn player(&self, name: &str) -> Option<&PlayerInfo> {
        self.players.get(name)
    }

    /// Amount `name` still owes to match [`GameInfo::min_bet_point`].
    pub fn to_call(&self, name: &str) -> i64 {
        let committed = self.player(name).map_or(0, |p| p.round.bet_point);
        self.min_bet_point - committed
    }

    /// Smallest positive stack at the table, if any player has one.
    pub fn shortest_stack(&self) -> Option<&PlayerInfo> {
        self.players
            .values()
            .filter(|p| p.point > 0)
            .min_by_key(|p| p.point)
    }
}
