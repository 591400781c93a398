//! Configuration command handler.
//!
//! Prints the resolved policy configuration as JSON, one entry per field
//! with its value and where it came from:
//!
//! ```json
//! {
//!   "bet_unit": {
//!     "value": 1,
//!     "source": "default"
//!   },
//!   ...
//! }
//! ```

use crate::config;
use crate::error::CliError;
use crate::ui;
use std::io::Write;

/// Handle the cfg command.
///
/// # Errors
///
/// Returns `CliError::Config` if configuration loading fails. Keys in the
/// config file that name no policy field are reported as warnings.
/// Returns `CliError::Io` if writing to output stream fails.
pub fn handle_cfg_command(out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    let resolved = config::load_with_sources()?;

    let values = serde_json::to_value(&resolved.config).map_err(std::io::Error::other)?;
    let serde_json::Value::Object(fields) = values else {
        return Err(CliError::Config("policy configuration is not a table".into()));
    };

    for (key, source) in &resolved.sources {
        if *source == config::ValueSource::File && !fields.contains_key(key) {
            ui::display_warning(err, &format!("Unknown configuration key '{}' ignored", key))?;
        }
    }

    let mut display = serde_json::Map::new();
    for (field, value) in fields {
        let source = resolved.source_of(&field);
        display.insert(
            field,
            serde_json::json!({ "value": value, "source": source }),
        );
    }
    let json_str = serde_json::to_string_pretty(&serde_json::Value::Object(display))
        .map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
