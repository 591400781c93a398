use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AgentError {
    #[error("Unknown agent kind: {0}")]
    UnknownKind(String),
    #[error("Invalid policy configuration: {0}")]
    InvalidConfig(String),
}
