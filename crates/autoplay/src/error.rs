use thiserror::Error;
use ventuno_core::TrickError;

#[derive(Debug, Error)]
pub enum AutoplayError {
    #[error("core error: {0}")]
    Core(#[from] TrickError),
    #[error("secret card missing from piles in round {round}")]
    CardLost { round: u8 },
    #[error("secret position {position} out of range")]
    InvalidSecretPosition { position: usize },
    #[error("io error: {0}")]
    Io(String),
    #[error("serialize error: {0}")]
    Serialize(String),
}

impl From<std::io::Error> for AutoplayError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value.to_string())
    }
}

impl From<serde_json::Error> for AutoplayError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value.to_string())
    }
}
