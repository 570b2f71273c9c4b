//! Domain-level error type used across services, repos and the store.
//!
//! HTTP- and storage-agnostic. Boundary code converts it into
//! [`crate::error::AppError`] through the provided `From` impl.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Why a write was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    /// Player is not on the game's roster.
    InvalidPlayer,
    /// Pin count outside 0..=10.
    InvalidScore,
    /// Roll would break frame count, frame pin sum or tenth-frame arity.
    IllegalSequence,
    InvalidGameName,
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    Game,
    Roll,
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InfraErrorKind {
    Timeout,
    Other(String),
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Caller misuse or a game-rule violation
    Validation(ValidationKind, String),
    NotFound(NotFoundKind, String),
    /// Store failures
    Infra(InfraErrorKind, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(kind, d) => write!(f, "validation error {kind:?}: {d}"),
            DomainError::NotFound(kind, d) => write!(f, "not found {kind:?}: {d}"),
            DomainError::Infra(kind, d) => write!(f, "infra {kind:?}: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }
    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }
    pub fn infra(kind: InfraErrorKind, detail: impl Into<String>) -> Self {
        Self::Infra(kind, detail.into())
    }

    pub fn invalid_player(detail: impl Into<String>) -> Self {
        Self::validation(ValidationKind::InvalidPlayer, detail)
    }
    pub fn invalid_score(detail: impl Into<String>) -> Self {
        Self::validation(ValidationKind::InvalidScore, detail)
    }
    pub fn illegal_sequence(detail: impl Into<String>) -> Self {
        Self::validation(ValidationKind::IllegalSequence, detail)
    }
    pub fn game_not_found(game_id: i64) -> Self {
        Self::not_found(NotFoundKind::Game, format!("game {game_id} not found"))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, DomainError::NotFound(..))
    }
    pub fn is_invalid_player(&self) -> bool {
        matches!(self, DomainError::Validation(ValidationKind::InvalidPlayer, _))
    }
    pub fn is_invalid_score(&self) -> bool {
        matches!(self, DomainError::Validation(ValidationKind::InvalidScore, _))
    }
    pub fn is_illegal_sequence(&self) -> bool {
        matches!(self, DomainError::Validation(ValidationKind::IllegalSequence, _))
    }
}
