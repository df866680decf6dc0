//! Error codes surfaced by the truco engine.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings that a
//! transport layer forwards to its clients.

use core::fmt;

/// Centralized error codes for the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Action submission
    /// The action is not legal in the current state
    IllegalAction,
    /// The game has already ended
    GameEnded,
    /// The serialized action could not be decoded
    MalformedAction,

    // Card validation
    /// Card token could not be parsed
    ParseCard,
    /// Card number/suit combination does not exist in the deck
    InvalidCard,
    /// Card not in the player's unrevealed hand
    CardNotInHand,
    /// Recorded deal is not a valid deal
    InvalidDeal,
    /// General validation error
    ValidationError,

    // Invariants
    /// Betting sequence cost requested before it finished
    UnfinishedSequence,
    /// Betting sequence is not in its legality table
    UnknownSequence,

    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::IllegalAction => "ILLEGAL_ACTION",
            Self::GameEnded => "GAME_ENDED",
            Self::MalformedAction => "MALFORMED_ACTION",

            Self::ParseCard => "PARSE_CARD",
            Self::InvalidCard => "INVALID_CARD",
            Self::CardNotInHand => "CARD_NOT_IN_HAND",
            Self::InvalidDeal => "INVALID_DEAL",
            Self::ValidationError => "VALIDATION_ERROR",

            Self::UnfinishedSequence => "UNFINISHED_SEQUENCE",
            Self::UnknownSequence => "UNKNOWN_SEQUENCE",

            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
