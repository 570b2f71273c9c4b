// Error mapping from domain errors to boundary codes and statuses.
use crate::errors::domain::{DomainError, InfraErrorKind, NotFoundKind, ValidationKind};
use crate::{AppError, ErrorCode};

#[test]
fn maps_rule_rejections_to_422_with_distinct_codes() {
    let cases = [
        (DomainError::invalid_player("x"), ErrorCode::InvalidPlayer),
        (DomainError::invalid_score("x"), ErrorCode::InvalidScore),
        (DomainError::illegal_sequence("x"), ErrorCode::IllegalSequence),
        (
            DomainError::validation(ValidationKind::InvalidGameName, "x"),
            ErrorCode::InvalidGameName,
        ),
        (
            DomainError::validation(ValidationKind::Other("WHATEVER".into()), "x"),
            ErrorCode::ValidationError,
        ),
    ];
    for (de, code) in cases {
        let app: AppError = de.into();
        assert_eq!(app.code(), code);
        assert_eq!(app.status(), 422);
    }
}

#[test]
fn maps_not_found() {
    let app: AppError = DomainError::game_not_found(7).into();
    assert_eq!(app.code().as_str(), "GAME_NOT_FOUND");
    assert_eq!(app.status(), 404);
    assert_eq!(app.detail(), "game 7 not found");

    let app: AppError = DomainError::not_found(NotFoundKind::Roll, "no roll").into();
    assert_eq!(app.code(), ErrorCode::RollNotFound);
    assert_eq!(app.status(), 404);
}

#[test]
fn maps_infra() {
    let app: AppError = DomainError::infra(InfraErrorKind::Timeout, "lock wait").into();
    assert_eq!(app.code().as_str(), "DB_TIMEOUT");
    assert_eq!(app.status(), 504);
    assert!(matches!(app, AppError::Timeout { .. }));

    let app: AppError = DomainError::infra(InfraErrorKind::Other("x".into()), "boom").into();
    assert_eq!(app.code(), ErrorCode::Internal);
    assert_eq!(app.status(), 500);
}

#[test]
fn predicates_tell_rejections_apart() {
    assert!(DomainError::invalid_player("x").is_invalid_player());
    assert!(!DomainError::invalid_player("x").is_illegal_sequence());
    assert!(DomainError::invalid_score("x").is_invalid_score());
    assert!(DomainError::illegal_sequence("x").is_illegal_sequence());
    assert!(DomainError::game_not_found(1).is_not_found());
    assert!(!DomainError::game_not_found(1).is_invalid_score());
}

#[test]
fn config_errors_are_500() {
    let app = AppError::config("BOWLING_LOCK_TIMEOUT_MS must be a positive integer");
    assert_eq!(app.code(), ErrorCode::ConfigError);
    assert_eq!(app.status(), 500);
}
