use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CardParseError {
    #[error("Invalid card: {0:?}")]
    InvalidCard(String),
    #[error("Invalid rank: {0}")]
    InvalidRank(String),
    #[error("Invalid suit: {0}")]
    InvalidSuit(String),
}

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Invalid game snapshot: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid game snapshot on line {line}: {source}")]
    Line {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}
