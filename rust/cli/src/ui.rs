//! UI helper functions for terminal output formatting.

use std::io::Write;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Display a warning message to stderr with "WARNING:" prefix
pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}

/// Renders exchange flags as `[x . . x x]`, `x` marking a card to exchange.
pub fn format_flags(flags: &[bool]) -> String {
    let marks: Vec<&str> = flags.iter().map(|&f| if f { "x" } else { "." }).collect();
    format!("[{}]", marks.join(" "))
}
