//! A seat that never risks anything beyond the call.
//!
//! The passive agent checks or calls every bet and keeps the hand it was
//! dealt. It ignores its cards and the table entirely, which makes it a
//! useful opponent for exercising a host and a baseline for comparing the
//! standard agent against.

use drawbot_engine::game::GameInfo;

use crate::RoundPlayer;
use crate::agent::{AgentSnapshot, AgentState};
use crate::betting::CHECK_OR_CALL;
use crate::trace::{RoundTrace, TraceSink, TracingSink};

pub struct PassiveAgent {
    state: AgentState,
    sink: Box<dyn TraceSink>,
}

impl PassiveAgent {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        let state = AgentState {
            id: id.into(),
            name: name.into(),
            round: 0,
            bet_unit: 0,
            win_count: 0,
        };
        let sink = Box::new(TracingSink::new(state.id.clone(), state.name.clone()));
        Self { state, sink }
    }
}

impl RoundPlayer for PassiveAgent {
    fn start(&mut self, data: &GameInfo) {
        self.state.round = data.current_round;
        RoundTrace::new(self.sink.as_ref(), self.state.round).info("Round start.");
    }

    fn bet(&mut self, _data: &GameInfo) -> i64 {
        CHECK_OR_CALL
    }

    /// Stands pat: nothing is exchanged.
    fn draw(&mut self, data: &GameInfo) -> Vec<bool> {
        let held = data
            .player(&self.state.name)
            .map_or(0, |p| p.round.cards.len());
        vec![false; held]
    }

    fn end(&mut self, data: &GameInfo) {
        if data.winner.as_deref() == Some(self.state.name.as_str()) {
            self.state.win_count += 1;
        }
    }

    fn test(&self) -> AgentSnapshot {
        AgentSnapshot::from(&self.state)
    }

    fn name(&self) -> &str {
        &self.state.name
    }
}
