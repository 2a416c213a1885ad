// Unit tests for error mapping - pure domain errors to HTTP codes
use crate::errors::domain::{DomainError, NotFoundKind, PreconditionKind};
use crate::{AppError, ErrorCode};

#[test]
fn maps_rule_violations_to_400() {
    let app: AppError = DomainError::invalid_state("Game is not in progress.").into();
    assert_eq!(app.code(), ErrorCode::InvalidState);
    assert_eq!(app.status().as_u16(), 400);

    let app: AppError = DomainError::PreconditionFailed(PreconditionKind::NoWords).into();
    assert_eq!(app.code().as_str(), "PRECONDITION_FAILED");
    assert_eq!(app.status().as_u16(), 400);
    assert_eq!(app.detail(), "At least one word is required to start the game.");

    let app: AppError = DomainError::invalid_argument("word must not be empty").into();
    assert_eq!(app.code(), ErrorCode::InvalidArgument);
    assert_eq!(app.status().as_u16(), 400);
}

#[test]
fn maps_not_found_by_kind() {
    let app: AppError = DomainError::game_not_found("g1").into();
    assert_eq!(app.code().as_str(), "GAME_NOT_FOUND");
    assert_eq!(app.status().as_u16(), 404);

    let app: AppError = DomainError::not_found(NotFoundKind::Player, "who").into();
    assert_eq!(app.code().as_str(), "PLAYER_NOT_FOUND");
    assert_eq!(app.status().as_u16(), 400);
    assert_eq!(app.detail(), "who");
}

#[test]
fn maps_duplicate_game_to_409() {
    let app: AppError = DomainError::already_exists("taken").into();
    assert_eq!(app.code(), ErrorCode::GameAlreadyExists);
    assert_eq!(app.status().as_u16(), 409);
}

#[test]
fn maps_corpus_failures_to_500() {
    let app: AppError = DomainError::corpus_unavailable("Failed to read pipes.txt").into();
    assert_eq!(app.code().as_str(), "CORPUS_UNAVAILABLE");
    assert_eq!(app.status().as_u16(), 500);

    let app: AppError = DomainError::corpus_empty("no records").into();
    assert_eq!(app.code().as_str(), "CORPUS_EMPTY");
    assert_eq!(app.status().as_u16(), 500);
}

#[test]
fn config_errors_are_internal() {
    let app = AppError::config("BACKEND_PORT must be a valid port number");
    assert_eq!(app.code(), ErrorCode::ConfigError);
    assert_eq!(app.status().as_u16(), 500);
}
