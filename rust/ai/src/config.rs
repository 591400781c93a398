//! Tunable constants for the standard draw policy.
//!
//! The defaults reproduce the reference behavior. Every divisor is read as
//! "a `1/divisor` share of the stack": `point / divisor` is compared with
//! the table's minimum bet.

use serde::{Deserialize, Serialize};

use crate::errors::AgentError;

/// How the hold heuristic looks for pairs and runs.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanMode {
    /// Compare neighbours in dealt order only.
    #[default]
    Adjacent,
    /// Compare neighbours after ordering the hand by rank.
    RankSorted,
}

impl ScanMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScanMode::Adjacent => "adjacent",
            ScanMode::RankSorted => "rank_sorted",
        }
    }
}

impl std::str::FromStr for ScanMode {
    type Err = AgentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "adjacent" => Ok(ScanMode::Adjacent),
            "rank_sorted" | "sorted" => Ok(ScanMode::RankSorted),
            _ => Err(AgentError::InvalidConfig(format!("unknown scan mode: {s}"))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    /// Raise granularity assigned at every round start.
    pub bet_unit: i64,

    /// First betting phase: without a made hand, drop when `point / n` is
    /// below the minimum bet.
    pub open_drop_divisor: i64,
    /// First betting phase: weak made hands call while `point / n` covers
    /// the minimum bet.
    pub open_call_divisor: i64,
    /// First betting phase: strong hands raise `bet_unit * n * tier`.
    pub open_raise_multiplier: i64,

    /// Second betting phase: one pair or two pair call while `point / n`
    /// covers the minimum bet.
    pub final_call_divisor: i64,
    /// Second betting phase: trips raise while `point / n` exceeds the
    /// minimum bet.
    pub trips_raise_divisor: i64,
    /// Second betting phase: trips call while `point / n` exceeds the
    /// minimum bet.
    pub trips_call_divisor: i64,
    /// Second betting phase: trips raise `bet_unit * n`.
    pub trips_raise_multiplier: i64,
    /// Second betting phase: straight or better raises this flat amount.
    pub strong_raise: i64,

    pub scan_mode: ScanMode,
    /// Chance of shoving instead of calling when a strong hand cannot raise.
    pub all_in_probability: f64,
    /// Seed for the all-in draw; unseeded agents draw one at construction.
    pub seed: Option<u64>,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            bet_unit: 1,
            open_drop_divisor: 10,
            open_call_divisor: 4,
            open_raise_multiplier: 800,
            final_call_divisor: 4,
            trips_raise_divisor: 15,
            trips_call_divisor: 3,
            trips_raise_multiplier: 4000,
            strong_raise: 15_000,
            scan_mode: ScanMode::Adjacent,
            all_in_probability: 0.0,
            seed: None,
        }
    }
}

/// Largest accepted `bet_unit`.
pub const MAX_BET_UNIT: i64 = 1_000_000_000;

impl PolicyConfig {
    pub fn validate(&self) -> Result<(), AgentError> {
        if !(1..=MAX_BET_UNIT).contains(&self.bet_unit) {
            return Err(AgentError::InvalidConfig(format!(
                "bet_unit must be within [1, {MAX_BET_UNIT}]"
            )));
        }
        let divisors = [
            ("open_drop_divisor", self.open_drop_divisor),
            ("open_call_divisor", self.open_call_divisor),
            ("final_call_divisor", self.final_call_divisor),
            ("trips_raise_divisor", self.trips_raise_divisor),
            ("trips_call_divisor", self.trips_call_divisor),
        ];
        let raises = [
            ("open_raise_multiplier", self.open_raise_multiplier),
            ("trips_raise_multiplier", self.trips_raise_multiplier),
            ("strong_raise", self.strong_raise),
        ];
        for (name, value) in divisors.into_iter().chain(raises) {
            if value <= 0 {
                return Err(AgentError::InvalidConfig(format!("{name} must be >0")));
            }
        }
        if !(0.0..=1.0).contains(&self.all_in_probability) {
            return Err(AgentError::InvalidConfig(
                "all_in_probability must be within [0, 1]".into(),
            ));
        }
        Ok(())
    }
}
