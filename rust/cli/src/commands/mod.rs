//! Command handler modules for the drawbot CLI.
//!
//! Each command lives in its own file and exposes one
//! `handle_<command>_command` function taking its output streams as
//! `&mut dyn Write` and returning `Result<(), CliError>`.

mod bet;
mod cfg;
mod draw;
mod eval;
mod replay;

pub use bet::handle_bet_command;
pub use cfg::handle_cfg_command;
pub use draw::handle_draw_command;
pub use eval::handle_eval_command;
pub use replay::handle_replay_command;
