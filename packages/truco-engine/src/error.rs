use thiserror::Error;

use crate::errors::domain::{DomainError, SequenceErrorKind, ValidationKind};
use crate::errors::ErrorCode;

/// Failure returned by the engine's entry points.
///
/// Every variant leaves the game state exactly as it was before the call.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Action not possible: {detail}")]
    IllegalAction { detail: String },
    #[error("Game has already ended")]
    GameEnded,
    #[error("Malformed action: {detail}")]
    MalformedAction { detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl EngineError {
    pub fn illegal(detail: impl Into<String>) -> Self {
        Self::IllegalAction {
            detail: detail.into(),
        }
    }

    pub fn malformed(detail: impl Into<String>) -> Self {
        Self::MalformedAction {
            detail: detail.into(),
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    /// Stable code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            EngineError::IllegalAction { .. } => ErrorCode::IllegalAction,
            EngineError::GameEnded => ErrorCode::GameEnded,
            EngineError::MalformedAction { .. } => ErrorCode::MalformedAction,
            EngineError::Config { .. } => ErrorCode::ConfigError,
            EngineError::Domain(DomainError::Validation(kind, _)) => match kind {
                ValidationKind::ParseCard => ErrorCode::ParseCard,
                ValidationKind::InvalidCard => ErrorCode::InvalidCard,
                ValidationKind::CardNotInHand => ErrorCode::CardNotInHand,
                ValidationKind::InvalidDeal => ErrorCode::InvalidDeal,
                _ => ErrorCode::ValidationError,
            },
            EngineError::Domain(DomainError::Sequence(kind, _)) => match kind {
                SequenceErrorKind::Unfinished => ErrorCode::UnfinishedSequence,
                _ => ErrorCode::UnknownSequence,
            },
        }
    }
}

impl From<serde_json::Error> for EngineError {
    fn from(e: serde_json::Error) -> Self {
        EngineError::malformed(e.to_string())
    }
}
