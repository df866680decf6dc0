//! Domain-level error type used by the rules layer.
//!
//! This error type is transport-agnostic. The orchestrator returns
//! `Result<T, crate::error::EngineError>` and converts from `DomainError`
//! using the provided `From<DomainError> for EngineError` implementation.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Input or rule validation failure kinds
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    ParseCard,
    InvalidCard,
    CardNotInHand,
    InvalidDeal,
    Other(String),
}

/// Betting sequence invariant violations
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SequenceErrorKind {
    /// Cost requested before the sequence reached a terminal step.
    Unfinished,
    /// The sequence is not a key of its legality table.
    Unknown,
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Input/user validation or business rule violation
    Validation(ValidationKind, String),
    /// Malformed betting sequence; signals a programming defect
    Sequence(SequenceErrorKind, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(kind, d) => write!(f, "validation error {kind:?}: {d}"),
            DomainError::Sequence(kind, d) => write!(f, "sequence error {kind:?}: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }
    pub fn validation_other(detail: impl Into<String>) -> Self {
        let detail = detail.into();
        Self::Validation(ValidationKind::Other(detail.clone()), detail)
    }
    pub fn sequence(kind: SequenceErrorKind, detail: impl Into<String>) -> Self {
        Self::Sequence(kind, detail.into())
    }
}
