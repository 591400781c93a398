//! Diagnostic output for agents.
//!
//! Agents never talk to a logger directly. They write through a
//! [`TraceSink`], which defaults to [`TracingSink`] and can be swapped for
//! [`NoopSink`] or a recording sink in tests. Nothing an agent decides may
//! depend on which sink is installed.

/// Leveled text sink an agent reports to.
pub trait TraceSink: Send {
    fn info(&self, message: &str);
    fn debug(&self, message: &str);
    fn warn(&self, message: &str);
}

/// Forwards to the `tracing` macros, tagged with the game and seat.
#[derive(Debug, Clone)]
pub struct TracingSink {
    game_id: String,
    player: String,
}

impl TracingSink {
    pub fn new(game_id: impl Into<String>, player: impl Into<String>) -> Self {
        Self {
            game_id: game_id.into(),
            player: player.into(),
        }
    }
}

impl TraceSink for TracingSink {
    fn info(&self, message: &str) {
        tracing::info!(game_id = %self.game_id, player = %self.player, "{}", message);
    }

    fn debug(&self, message: &str) {
        tracing::debug!(game_id = %self.game_id, player = %self.player, "{}", message);
    }

    fn warn(&self, message: &str) {
        tracing::warn!(game_id = %self.game_id, player = %self.player, "{}", message);
    }
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {
    fn info(&self, _message: &str) {}
    fn debug(&self, _message: &str) {}
    fn warn(&self, _message: &str) {}
}

/// Prefixes every message with the round number, `<Round: N>: ...`.
pub(crate) struct RoundTrace<'a> {
    sink: &'a dyn TraceSink,
    round: u32,
}

impl<'a> RoundTrace<'a> {
    pub(crate) fn new(sink: &'a dyn TraceSink, round: u32) -> Self {
        Self { sink, round }
    }

    pub(crate) fn info(&self, text: impl AsRef<str>) {
        self.sink.info(&self.format(text.as_ref()));
    }

    pub(crate) fn debug(&self, text: impl AsRef<str>) {
        self.sink.debug(&self.format(text.as_ref()));
    }

    pub(crate) fn warn(&self, text: impl AsRef<str>) {
        self.sink.warn(&self.format(text.as_ref()));
    }

    fn format(&self, text: &str) -> String {
        format!("<Round: {}>: {}", self.round, text)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::TraceSink;
    use std::sync::{Arc, Mutex};

    /// Keeps `(level, message)` pairs for assertions.
    #[derive(Debug, Clone, Default)]
    pub(crate) struct RecordingSink {
        pub(crate) lines: Arc<Mutex<Vec<(&'static str, String)>>>,
    }

    impl RecordingSink {
        pub(crate) fn lines(&self) -> Vec<(&'static str, String)> {
            self.lines.lock().unwrap().clone()
        }
    }

    impl TraceSink for RecordingSink {
        fn info(&self, message: &str) {
            self.lines.lock().unwrap().push(("info", message.to_string()));
        }
        fn debug(&self, message: &str) {
            self.lines.lock().unwrap().push(("debug", message.to_string()));
        }
        fn warn(&self, message: &str) {
            self.lines.lock().unwrap().push(("warn", message.to_string()));
        }
    }
}
