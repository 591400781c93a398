//! Bet sizing for the two betting phases of a draw round.
//!
//! A decision is encoded as a single integer, the way the host reads it:
//!
//! - `0`: check, or call the outstanding amount
//! - `v > 0`: raise by `v` on top of the call; more than the stack is an all-in
//! - `v < 0`: drop out of the round (`-1` canonically)

use std::fmt;

use drawbot_engine::cards::format_cards;
use drawbot_engine::game::{GameInfo, Phase};
use drawbot_engine::hand::hand_value;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::agent::AgentState;
use crate::config::PolicyConfig;
use crate::trace::RoundTrace;

pub const CHECK_OR_CALL: i64 = 0;
pub const DROP: i64 = -1;

/// Readable view of an encoded decision.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum BetDecision {
    CheckOrCall,
    Raise(i64),
    Drop,
}

impl From<i64> for BetDecision {
    fn from(v: i64) -> Self {
        match v {
            0 => BetDecision::CheckOrCall,
            v if v > 0 => BetDecision::Raise(v),
            _ => BetDecision::Drop,
        }
    }
}

impl fmt::Display for BetDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BetDecision::CheckOrCall => f.write_str("check/call"),
            BetDecision::Raise(v) => write!(f, "raise {}", v),
            BetDecision::Drop => f.write_str("drop"),
        }
    }
}

/// What the policy knows about its own seat at decision time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SeatView {
    hand_value: u8,
    point: i64,
    min_bet: i64,
    /// Spendable after matching the table.
    stack: i64,
    bet_unit: i64,
}

impl SeatView {
    fn can_raise(&self) -> bool {
        self.stack > 0
    }

    /// `point / divisor < min_bet`, without integer truncation.
    fn share_below(&self, divisor: i64) -> bool {
        self.point < self.min_bet.saturating_mul(divisor.max(1))
    }

    /// `point / divisor > min_bet`, without integer truncation.
    fn share_above(&self, divisor: i64) -> bool {
        self.point > self.min_bet.saturating_mul(divisor.max(1))
    }
}

#[derive(Debug, Clone)]
pub struct BettingPolicy {
    config: PolicyConfig,
    rng: ChaCha20Rng,
}

impl BettingPolicy {
    pub fn new(config: PolicyConfig) -> Self {
        let seed = config.seed.unwrap_or_else(|| rand::rng().random());
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
            config,
        }
    }

    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }

    /// Decides the encoded bet for `agent`'s seat.
    ///
    /// A seat missing from the snapshot is treated as an empty hand with no
    /// points, which resolves to a check or a drop.
    pub(crate) fn decide(
        &mut self,
        data: &GameInfo,
        agent: &AgentState,
        trace: &RoundTrace<'_>,
    ) -> i64 {
        trace.info(format!(
            "Phase {}. pot: {}, minBetPoint: {}",
            data.phase, data.pot, data.min_bet_point
        ));
        for player in data.players.values() {
            trace.debug(format!(
                "{} info. point: {}, betPoint: {}",
                player.name, player.point, player.round.bet_point
            ));
        }

        let me = data.player(&agent.name);
        let cards = me.map(|p| p.round.cards.as_slice()).unwrap_or_default();
        let point = me.map_or(0, |p| p.point);
        let bet_point = me.map_or(0, |p| p.round.bet_point);
        let diff = data.to_call(&agent.name);
        let view = SeatView {
            hand_value: hand_value(cards),
            point,
            min_bet: data.min_bet_point,
            stack: point - diff,
            bet_unit: agent.bet_unit,
        };
        trace.debug(format!(
            "{} info. point: {}, betPoint: {}, currentHandValue: {}",
            agent.name, point, bet_point, view.hand_value
        ));
        if let Some(short) = data.shortest_stack() {
            trace.debug(format!(
                "Shortest stack: {} with {} points",
                short.name, short.point
            ));
        }

        if data.phase == Phase::Bet1 {
            return self.opening_bet(&view);
        }
        if let Some(decision) = self.final_bet(&view) {
            return decision;
        }

        // strong hand but nothing left to raise with
        trace.info(format!("my cards: {}, diff: {}", format_cards(cards), diff));
        if self.declare_all_in() && point > 0 {
            trace.info("Declaring all-in.");
            return point;
        }
        CHECK_OR_CALL
    }

    fn opening_bet(&self, view: &SeatView) -> i64 {
        let cfg = &self.config;
        match view.hand_value {
            0..=1 => {
                if view.min_bet == 0 {
                    CHECK_OR_CALL
                } else if view.share_below(cfg.open_drop_divisor) {
                    DROP
                } else {
                    CHECK_OR_CALL
                }
            }
            2..=4 => {
                if view.share_below(cfg.open_call_divisor) {
                    DROP
                } else {
                    CHECK_OR_CALL
                }
            }
            tier if view.can_raise() => {
                view.bet_unit
                    .saturating_mul(cfg.open_raise_multiplier)
                    .saturating_mul(i64::from(tier))
            }
            _ => CHECK_OR_CALL,
        }
    }

    /// `None` when a strong hand cannot raise, leaving the all-in choice
    /// to the caller.
    fn final_bet(&self, view: &SeatView) -> Option<i64> {
        let cfg = &self.config;
        let decision = match view.hand_value {
            0..=1 => DROP,
            2..=3 => {
                if view.can_raise() && !view.share_below(cfg.final_call_divisor) {
                    CHECK_OR_CALL
                } else {
                    DROP
                }
            }
            4 => {
                if view.share_above(cfg.trips_raise_divisor) {
                    view.bet_unit.saturating_mul(cfg.trips_raise_multiplier)
                } else if view.share_above(cfg.trips_call_divisor) {
                    CHECK_OR_CALL
                } else {
                    DROP
                }
            }
            _ if view.can_raise() => cfg.strong_raise,
            _ => return None,
        };
        Some(decision)
    }

    fn declare_all_in(&mut self) -> bool {
        let p = self.config.all_in_probability;
        p > 0.0 && self.rng.random_bool(p.min(1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::NoopSink;
    use drawbot_engine::cards::parse_cards;
    use drawbot_engine::game::{PlayerInfo, PlayerStatus, RoundState};
    use std::collections::BTreeMap;

    const ME: &str = "me";

    fn table(phase: Phase, hand: &str, point: i64, bet_point: i64, min_bet: i64) -> GameInfo {
        let mut players = BTreeMap::new();
        players.insert(
            ME.to_string(),
            PlayerInfo {
                name: ME.to_string(),
                point,
                status: PlayerStatus::Active,
                round: RoundState {
                    bet_point,
                    cards: parse_cards(hand).unwrap(),
                    hand: None,
                },
            },
        );
        players.insert(
            "rival".to_string(),
            PlayerInfo {
                name: "rival".to_string(),
                point: 5_000,
                status: PlayerStatus::Active,
                round: RoundState::default(),
            },
        );
        GameInfo {
            phase,
            pot: 0,
            min_bet_point: min_bet,
            current_round: 1,
            winner: None,
            players,
        }
    }

    fn me(bet_unit: i64) -> AgentState {
        AgentState {
            id: "g".into(),
            name: ME.into(),
            round: 1,
            bet_unit,
            win_count: 0,
        }
    }

    fn decide_with(config: PolicyConfig, data: &GameInfo) -> i64 {
        let mut policy = BettingPolicy::new(config);
        policy.decide(data, &me(1), &RoundTrace::new(&NoopSink, 1))
    }

    fn decide(data: &GameInfo) -> i64 {
        decide_with(PolicyConfig::default(), data)
    }

    const NOTHING: &str = "2c 7d 9s Jh Kd";
    const PAIR: &str = "2c 2d 9s Jh Kd";
    const TWO_PAIR: &str = "2c 2d 9s 9h Kd";
    const TRIPS: &str = "2c 2d 2s Jh Kd";
    const STRAIGHT: &str = "5c 6d 7s 8h 9d";
    const FLUSH: &str = "2h 6h 9h Jh Kh";

    #[test]
    fn opening_checks_without_hand_when_unopened() {
        assert_eq!(decide(&table(Phase::Bet1, NOTHING, 1000, 0, 0)), 0);
    }

    #[test]
    fn opening_without_hand_drops_to_large_bet() {
        // 1000 / 10 = 100 < 101
        assert_eq!(decide(&table(Phase::Bet1, NOTHING, 1000, 0, 101)), -1);
        assert_eq!(decide(&table(Phase::Bet1, NOTHING, 1000, 0, 100)), 0);
    }

    #[test]
    fn opening_share_is_not_truncated() {
        // 1005 / 10 = 100.5, still below 101
        assert_eq!(decide(&table(Phase::Bet1, NOTHING, 1005, 0, 101)), -1);
        assert_eq!(decide(&table(Phase::Bet1, NOTHING, 1010, 0, 101)), 0);
    }

    #[test]
    fn opening_weak_hand_calls_within_quarter_stack() {
        assert_eq!(decide(&table(Phase::Bet1, PAIR, 1000, 0, 250)), 0);
        assert_eq!(decide(&table(Phase::Bet1, TRIPS, 1000, 0, 251)), -1);
        assert_eq!(decide(&table(Phase::Bet1, TWO_PAIR, 1000, 0, 0)), 0);
    }

    #[test]
    fn opening_straight_raises_by_tier() {
        assert_eq!(decide(&table(Phase::Bet1, STRAIGHT, 10_000, 0, 100)), 4000);
        assert_eq!(decide(&table(Phase::Bet1, FLUSH, 10_000, 0, 100)), 4800);
    }

    #[test]
    fn opening_raise_scales_with_bet_unit() {
        let data = table(Phase::Bet1, STRAIGHT, 10_000, 0, 100);
        let mut policy = BettingPolicy::new(PolicyConfig::default());
        let got = policy.decide(&data, &me(3), &RoundTrace::new(&NoopSink, 1));
        assert_eq!(got, 12_000);
    }

    #[test]
    fn opening_strong_hand_calls_when_covering_takes_everything() {
        // owes 500, holds exactly 500: stack 0
        assert_eq!(decide(&table(Phase::Bet1, STRAIGHT, 500, 0, 500)), 0);
    }

    #[test]
    fn final_round_always_drops_without_hand() {
        for (point, min_bet) in [(1_000_000, 0), (0, 0), (10, 500)] {
            assert_eq!(decide(&table(Phase::Bet2, NOTHING, point, 0, min_bet)), -1);
        }
    }

    #[test]
    fn final_round_pair_needs_room_to_raise() {
        assert_eq!(decide(&table(Phase::Bet2, PAIR, 1000, 0, 250)), 0);
        assert_eq!(decide(&table(Phase::Bet2, TWO_PAIR, 1000, 0, 251)), -1);
        // covering 1000 leaves nothing
        assert_eq!(decide(&table(Phase::Bet2, PAIR, 1000, 0, 1000)), -1);
    }

    #[test]
    fn final_round_trips_tiers() {
        // 3000 / 15 = 200 > 199: raise
        assert_eq!(decide(&table(Phase::Bet2, TRIPS, 3000, 0, 199)), 4000);
        // not above 200, but 3000 / 3 = 1000 > 200: call
        assert_eq!(decide(&table(Phase::Bet2, TRIPS, 3000, 0, 200)), 0);
        // 3000 / 3 = 1000 is not above 1000: drop
        assert_eq!(decide(&table(Phase::Bet2, TRIPS, 3000, 0, 1000)), -1);
    }

    #[test]
    fn final_round_strong_hand_raises_flat() {
        assert_eq!(decide(&table(Phase::Bet2, STRAIGHT, 2000, 0, 100)), 15_000);
    }

    #[test]
    fn final_round_strong_hand_without_room_calls_or_shoves() {
        let data = table(Phase::Bet2, FLUSH, 400, 100, 600);
        assert_eq!(decide(&data), 0);

        let shove = PolicyConfig {
            all_in_probability: 1.0,
            seed: Some(7),
            ..PolicyConfig::default()
        };
        assert_eq!(decide_with(shove, &data), 400);
    }

    #[test]
    fn oversized_raises_saturate() {
        let mut policy = BettingPolicy::new(PolicyConfig::default());
        let huge = me(i64::MAX / 1000);
        let trace = RoundTrace::new(&NoopSink, 1);

        let opening = table(Phase::Bet1, STRAIGHT, 50_000, 0, 0);
        assert_eq!(policy.decide(&opening, &huge, &trace), i64::MAX);

        let trips = table(Phase::Bet2, TRIPS, 50_000, 0, 100);
        assert_eq!(policy.decide(&trips, &huge, &trace), i64::MAX);
    }

    #[test]
    fn missing_seat_checks_or_drops() {
        let mut data = table(Phase::Bet1, STRAIGHT, 1000, 0, 0);
        data.players.remove(ME);
        assert_eq!(decide(&data), 0);
        data.min_bet_point = 10;
        assert_eq!(decide(&data), -1);
        data.phase = Phase::Bet2;
        assert_eq!(decide(&data), -1);
    }

    #[test]
    fn decisions_read_back_as_actions() {
        assert_eq!(BetDecision::from(0), BetDecision::CheckOrCall);
        assert_eq!(BetDecision::from(4000), BetDecision::Raise(4000));
        assert_eq!(BetDecision::from(-1), BetDecision::Drop);
        assert_eq!(BetDecision::Raise(15).to_string(), "raise 15");
    }
}
