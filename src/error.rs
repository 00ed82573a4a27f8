//! Crate-wide error type.

use thiserror::Error;
use uuid::Uuid;

/// Everything that can go wrong while recording or evaluating progress.
#[derive(Debug, Error)]
pub enum ProgressError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("store returned HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("could not reach store: {0}")]
    Transport(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("no stats recorded for player {0}")]
    PlayerNotFound(Uuid),

    #[error("unknown power-up '{0}'")]
    UnknownPowerUp(String),

    #[error("not enough points: need {needed}, have {available}")]
    InsufficientPoints { needed: u64, available: u64 },

    /// Raised by `MemoryStore` when a table has been told to reject writes.
    #[error("write to {0} rejected")]
    InjectedFailure(&'static str),
}

pub type Result<T> = std::result::Result<T, ProgressError>;

impl From<ureq::Error> for ProgressError {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::Status(status, response) => {
                let body = response.into_string().unwrap_or_default();
                ProgressError::Http { status, body }
            }
            ureq::Error::Transport(transport) => ProgressError::Transport(transport.to_string()),
        }
    }
}
