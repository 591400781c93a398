//! # drawbot-ai: Seat Agents for Five-Card Draw
//!
//! Agents are driven by a host table through a fixed lifecycle every round:
//! `start`, one or more `bet` calls, `draw`, `bet` again, then `end`. Each
//! hook receives a read-only [`GameInfo`] snapshot; agents keep only their
//! own bookkeeping.
//!
//! ## Core Components
//!
//! - [`RoundPlayer`] - Trait a host drives each round
//! - [`agent`] - The standard rule-based agent and its per-seat state
//! - [`betting`] - Bet sizing for both betting phases
//! - [`hold`] - Which cards to keep at the draw
//! - [`config`] - Policy constants
//! - [`trace`] - Pluggable diagnostic sink
//! - [`create_agent`] - Factory by kind name
//!
//! ## Quick Start
//!
//! ```rust
//! use drawbot_ai::{create_agent, RoundPlayer};
//! use drawbot_ai::config::PolicyConfig;
//! use drawbot_engine::game::GameInfo;
//!
//! let mut agent = create_agent("standard", "game-1", "me", PolicyConfig::default()).unwrap();
//! let info = GameInfo::from_json(r#"{
//!     "phase": "bet-1", "minBetPoint": 0, "currentRound": 1,
//!     "players": {"me": {"name": "me", "point": 1000, "status": "active",
//!         "round": {"betPoint": 0, "cards": [
//!             {"suit": "clubs", "number": 2}, {"suit": "diamonds", "number": 2},
//!             {"suit": "spades", "number": 5}, {"suit": "hearts", "number": 9},
//!             {"suit": "diamonds", "number": 13}]}}}
//! }"#).unwrap();
//!
//! agent.start(&info);
//! assert_eq!(agent.bet(&info), 0);
//! assert_eq!(agent.draw(&info), vec![false, false, true, true, true]);
//! ```

use drawbot_engine::game::GameInfo;

pub mod agent;
pub mod betting;
pub mod config;
pub mod errors;
pub mod hold;
pub mod passive;
pub mod trace;

pub use agent::{AgentSnapshot, DrawAgent};
pub use config::PolicyConfig;
pub use errors::AgentError;

/// Lifecycle a host table drives for every seat.
///
/// Hooks never fail: a seat missing from the snapshot, or a malformed hand,
/// degrades to a check, a drop, or an empty exchange.
pub trait RoundPlayer: Send {
    /// A new round begins.
    fn start(&mut self, data: &GameInfo);

    /// Encoded bet: `0` check/call, `> 0` raise by that much, `< 0` drop.
    /// See [`betting`].
    fn bet(&mut self, data: &GameInfo) -> i64;

    /// One flag per own card, `true` to exchange it.
    fn draw(&mut self, data: &GameInfo) -> Vec<bool>;

    /// The round is over; `data.winner` names the winner, if any.
    fn end(&mut self, data: &GameInfo);

    /// Diagnostic snapshot of the agent's bookkeeping.
    fn test(&self) -> AgentSnapshot;

    /// Seat name this agent answers for.
    fn name(&self) -> &str;
}

/// Agent kinds understood by [`create_agent`].
pub const AGENT_KINDS: &[&str] = &["standard", "passive"];

/// Factory function to create a seat agent by kind.
///
/// # Supported Kinds
///
/// - `"standard"` - [`DrawAgent`], configured by `config`
/// - `"passive"` - [`passive::PassiveAgent`], ignores `config`
///
/// # Errors
///
/// [`AgentError::UnknownKind`] for any other kind, and
/// [`AgentError::InvalidConfig`] when `config` fails validation.
///
/// ```rust
/// use drawbot_ai::{create_agent, AgentError, PolicyConfig};
///
/// let agent = create_agent("passive", "g", "demo", PolicyConfig::default()).unwrap();
/// assert_eq!(agent.name(), "demo");
///
/// let err = create_agent("oracle", "g", "x", PolicyConfig::default()).err();
/// assert_eq!(err, Some(AgentError::UnknownKind("oracle".into())));
/// ```
pub fn create_agent(
    kind: &str,
    game_id: &str,
    name: &str,
    config: PolicyConfig,
) -> Result<Box<dyn RoundPlayer>, AgentError> {
    match kind {
        "standard" => {
            config.validate()?;
            Ok(Box::new(DrawAgent::new(game_id, name, config)))
        }
        "passive" => Ok(Box::new(passive::PassiveAgent::new(game_id, name))),
        _ => Err(AgentError::UnknownKind(kind.to_string())),
    }
}
