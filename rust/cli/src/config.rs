//! Policy configuration with source tracking.
//!
//! Values start at [`PolicyConfig::default`], are overridden by a TOML file
//! named in `DRAWBOT_CONFIG`, then by individual `DRAWBOT_*` variables.

use std::collections::BTreeMap;
use std::fs;

use drawbot_ai::config::{PolicyConfig, ScanMode};
use serde::Serialize;

pub const CONFIG_ENV: &str = "DRAWBOT_CONFIG";
pub const BET_UNIT_ENV: &str = "DRAWBOT_BET_UNIT";
pub const SCAN_MODE_ENV: &str = "DRAWBOT_SCAN_MODE";
pub const ALL_IN_ENV: &str = "DRAWBOT_ALL_IN_PROBABILITY";
pub const SEED_ENV: &str = "DRAWBOT_SEED";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: PolicyConfig,
    /// Origin of every field that did not keep its default.
    pub sources: BTreeMap<String, ValueSource>,
}

impl ConfigResolved {
    pub fn source_of(&self, field: &str) -> ValueSource {
        self.sources
            .get(field)
            .copied()
            .unwrap_or(ValueSource::Default)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

pub fn load() -> Result<PolicyConfig, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = PolicyConfig::default();
    let mut sources = BTreeMap::new();

    if let Ok(path) = std::env::var(CONFIG_ENV)
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let table: toml::Table = toml::from_str(&s)?;
        for key in table.keys() {
            sources.insert(key.clone(), ValueSource::File);
        }
        cfg = toml::from_str(&s)?;
    }

    if let Some(v) = env_value(BET_UNIT_ENV) {
        cfg.bet_unit = v
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid bet unit".into()))?;
        sources.insert("bet_unit".into(), ValueSource::Env);
    }
    if let Some(v) = env_value(SCAN_MODE_ENV) {
        cfg.scan_mode = v
            .parse::<ScanMode>()
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;
        sources.insert("scan_mode".into(), ValueSource::Env);
    }
    if let Some(v) = env_value(ALL_IN_ENV) {
        cfg.all_in_probability = v
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid all-in probability".into()))?;
        sources.insert("all_in_probability".into(), ValueSource::Env);
    }
    if let Some(v) = env_value(SEED_ENV) {
        cfg.seed = Some(
            v.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.insert("seed".into(), ValueSource::Env);
    }

    cfg.validate()
        .map_err(|e| ConfigError::Invalid(e.to_string()))?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

fn env_value(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}
