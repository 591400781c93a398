//! The standard draw agent: one instance per seat, driven by the host
//! through `start → bet → draw → bet → end` every round.

use drawbot_engine::cards::format_cards;
use drawbot_engine::game::{GameInfo, Phase};
use serde::Serialize;

use crate::RoundPlayer;
use crate::betting::BettingPolicy;
use crate::config::PolicyConfig;
use crate::hold::plan_holds;
use crate::trace::{RoundTrace, TraceSink, TracingSink};

/// Per-seat bookkeeping, owned and mutated only by its agent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentState {
    pub id: String,
    pub name: String,
    /// Last round number seen at `start`.
    pub round: u32,
    /// Raise granularity, fixed from one `start` to the next.
    pub bet_unit: i64,
    pub win_count: u32,
}

/// Read-only view returned by [`RoundPlayer::test`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentSnapshot {
    pub id: String,
    pub name: String,
    pub round: u32,
    pub bet_unit: i64,
    pub win: u32,
}

impl From<&AgentState> for AgentSnapshot {
    fn from(s: &AgentState) -> Self {
        Self {
            id: s.id.clone(),
            name: s.name.clone(),
            round: s.round,
            bet_unit: s.bet_unit,
            win: s.win_count,
        }
    }
}

/// Where the agent is within the current round.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum RoundStage {
    Idle,
    RoundStarted,
    Betting1,
    Drawn,
    Betting2,
    RoundEnded,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Hook {
    Start,
    Bet,
    Draw,
    End,
}

impl RoundStage {
    /// Stage after `hook`, and whether the hook was expected here.
    ///
    /// Unexpected hooks still move the stage; the host owns the ordering.
    fn advance(self, hook: Hook, phase: Phase) -> (RoundStage, bool) {
        use RoundStage::*;
        match (hook, self) {
            (Hook::Start, Idle | RoundEnded) => (RoundStarted, true),
            (Hook::Start, _) => (RoundStarted, false),
            (Hook::Bet, RoundStarted | Betting1) => (Betting1, true),
            (Hook::Bet, Drawn | Betting2) => (Betting2, true),
            (Hook::Bet, _) if phase == Phase::Bet1 => (Betting1, false),
            (Hook::Bet, _) => (Betting2, false),
            (Hook::Draw, Betting1) => (Drawn, true),
            (Hook::Draw, _) => (Drawn, false),
            // everyone else may drop before the draw
            (Hook::End, RoundStarted | Betting1 | Drawn | Betting2) => (RoundEnded, true),
            (Hook::End, _) => (RoundEnded, false),
        }
    }
}

/// Rule-based five-card-draw agent.
///
/// # Example
///
/// ```rust
/// use drawbot_ai::RoundPlayer;
/// use drawbot_ai::agent::DrawAgent;
/// use drawbot_ai::config::PolicyConfig;
///
/// let agent = DrawAgent::new("game-1", "team_8", PolicyConfig::default());
/// let snap = agent.test();
/// assert_eq!(snap.name, "team_8");
/// assert_eq!((snap.round, snap.bet_unit, snap.win), (0, 0, 0));
/// ```
pub struct DrawAgent {
    state: AgentState,
    stage: RoundStage,
    policy: BettingPolicy,
    sink: Box<dyn TraceSink>,
}

impl DrawAgent {
    pub fn new(id: impl Into<String>, name: impl Into<String>, config: PolicyConfig) -> Self {
        let (id, name) = (id.into(), name.into());
        let sink = Box::new(TracingSink::new(id.clone(), name.clone()));
        Self::with_sink(id, name, config, sink)
    }

    /// Builds an agent reporting to `sink` instead of `tracing`.
    pub fn with_sink(
        id: impl Into<String>,
        name: impl Into<String>,
        config: PolicyConfig,
        sink: Box<dyn TraceSink>,
    ) -> Self {
        let state = AgentState {
            id: id.into(),
            name: name.into(),
            round: 0,
            bet_unit: 0,
            win_count: 0,
        };
        sink.info(&format!("Start game. ID: {}", state.id));
        Self {
            state,
            stage: RoundStage::Idle,
            policy: BettingPolicy::new(config),
            sink,
        }
    }

    pub fn state(&self) -> &AgentState {
        &self.state
    }

    pub fn stage(&self) -> RoundStage {
        self.stage
    }

    fn trace(&self) -> RoundTrace<'_> {
        RoundTrace::new(self.sink.as_ref(), self.state.round)
    }

    fn enter(&mut self, hook: Hook, phase: Phase) {
        let (next, expected) = self.stage.advance(hook, phase);
        if !expected {
            self.trace().warn(format!(
                "Unexpected {:?} call in stage {:?} (phase {}).",
                hook, self.stage, phase
            ));
        }
        self.stage = next;
    }
}

impl RoundPlayer for DrawAgent {
    fn start(&mut self, data: &GameInfo) {
        self.state.round = data.current_round;
        self.enter(Hook::Start, data.phase);
        let trace = self.trace();
        trace.info("Round start.");
        for player in data.players.values() {
            trace.debug(format!(
                "Round start. {} info. status: {}, point: {}",
                player.name, player.status, player.point
            ));
        }

        self.state.bet_unit = self.policy.config().bet_unit;
        self.trace()
            .debug(format!("bet unit: {}.", self.state.bet_unit));
    }

    fn bet(&mut self, data: &GameInfo) -> i64 {
        self.enter(Hook::Bet, data.phase);
        let trace = RoundTrace::new(self.sink.as_ref(), self.state.round);
        self.policy.decide(data, &self.state, &trace)
    }

    fn draw(&mut self, data: &GameInfo) -> Vec<bool> {
        self.enter(Hook::Draw, data.phase);
        let cards = data
            .player(&self.state.name)
            .map(|p| p.round.cards.as_slice())
            .unwrap_or_default();
        let trace = self.trace();
        trace.info(format!(
            "phase: {}. my cards: {}",
            data.phase,
            format_cards(cards)
        ));
        let plan = plan_holds(cards, self.policy.config().scan_mode);
        trace.debug(format!("hold by {:?}: {:?}", plan.reason, plan.held));
        plan.exchange_flags()
    }

    fn end(&mut self, data: &GameInfo) {
        self.enter(Hook::End, data.phase);
        let winner = data.winner.as_deref().unwrap_or("none");
        let trace = self.trace();
        trace.info(format!("Round end. winner: {}", winner));
        for player in data.players.values() {
            trace.debug(format!(
                "Round end. {} info. status: {}, point: {}, cards: {}, hand: {}",
                player.name,
                player.status,
                player.point,
                format_cards(&player.round.cards),
                player.round.hand.as_deref().unwrap_or("-"),
            ));
        }

        if data.winner.as_deref() == Some(self.state.name.as_str()) {
            self.state.win_count += 1;
            self.trace()
                .debug(format!("Win count: {}", self.state.win_count));
        }
    }

    fn test(&self) -> AgentSnapshot {
        AgentSnapshot::from(&self.state)
    }

    fn name(&self) -> &str {
        &self.state.name
    }
}
