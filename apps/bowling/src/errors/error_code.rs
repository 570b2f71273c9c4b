//! Error codes exposed to callers of the bowling services.
//!
//! Add new codes here; never pass ad-hoc strings as error codes. Every code
//! is SCREAMING_SNAKE_CASE.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request validation
    /// Player is not on the game's roster
    InvalidPlayer,
    /// Roll score outside 0..=10
    InvalidScore,
    /// Roll breaks the rules of the game so far
    IllegalSequence,
    /// Game name missing or blank
    InvalidGameName,
    /// General validation error
    ValidationError,

    // Resource not found
    GameNotFound,
    RollNotFound,
    NotFound,

    // System errors
    /// Timed out waiting for the player's write lock
    DbTimeout,
    Internal,
    ConfigError,
}

impl ErrorCode {
    pub const ALL: [ErrorCode; 11] = [
        Self::InvalidPlayer,
        Self::InvalidScore,
        Self::IllegalSequence,
        Self::InvalidGameName,
        Self::ValidationError,
        Self::GameNotFound,
        Self::RollNotFound,
        Self::NotFound,
        Self::DbTimeout,
        Self::Internal,
        Self::ConfigError,
    ];

    /// Canonical SCREAMING_SNAKE_CASE string for this code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidPlayer => "INVALID_PLAYER",
            Self::InvalidScore => "INVALID_SCORE",
            Self::IllegalSequence => "ILLEGAL_SEQUENCE",
            Self::InvalidGameName => "INVALID_GAME_NAME",
            Self::ValidationError => "VALIDATION_ERROR",

            Self::GameNotFound => "GAME_NOT_FOUND",
            Self::RollNotFound => "ROLL_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::DbTimeout => "DB_TIMEOUT",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
