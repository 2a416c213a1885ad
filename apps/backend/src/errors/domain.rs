//! Domain-level error type used by the game FSM, registry and factory.
//!
//! This error type is HTTP-agnostic. Handlers return
//! `Result<T, crate::error::AppError>` and convert from `DomainError`
//! through the `From<DomainError> for AppError` implementation.

use thiserror::Error;

/// Entity kinds that can be missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotFoundKind {
    Game,
    Player,
}

/// Requirements checked when a game starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreconditionKind {
    NoPlayers,
    NoWords,
}

impl PreconditionKind {
    pub fn describe(self) -> &'static str {
        match self {
            PreconditionKind::NoPlayers => "At least one player is required to start the game.",
            PreconditionKind::NoWords => "At least one word is required to start the game.",
        }
    }
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Operation not permitted in the current phase
    #[error("{0}")]
    InvalidState(String),
    /// `start` called without players or words
    #[error("{}", .0.describe())]
    PreconditionFailed(PreconditionKind),
    /// Unknown game or player
    #[error("{1}")]
    NotFound(NotFoundKind, String),
    /// Empty or malformed input, rejected before any mutation
    #[error("{0}")]
    InvalidArgument(String),
    /// Caller-supplied game id collides with an existing game
    #[error("{0}")]
    AlreadyExists(String),
    /// Word corpus could not be read in time
    #[error("{0}")]
    CorpusUnavailable(String),
    /// Word corpus holds no usable record
    #[error("{0}")]
    CorpusEmpty(String),
}

impl DomainError {
    pub fn invalid_state(detail: impl Into<String>) -> Self {
        Self::InvalidState(detail.into())
    }
    pub fn invalid_argument(detail: impl Into<String>) -> Self {
        Self::InvalidArgument(detail.into())
    }
    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }
    pub fn already_exists(detail: impl Into<String>) -> Self {
        Self::AlreadyExists(detail.into())
    }
    pub fn corpus_unavailable(detail: impl Into<String>) -> Self {
        Self::CorpusUnavailable(detail.into())
    }
    pub fn corpus_empty(detail: impl Into<String>) -> Self {
        Self::CorpusEmpty(detail.into())
    }

    pub fn game_not_found(game_id: &str) -> Self {
        Self::not_found(NotFoundKind::Game, format!("Game '{game_id}' not found."))
    }
    pub fn player_not_found(player_ref: &str) -> Self {
        Self::not_found(NotFoundKind::Player, format!("Player '{player_ref}' not found."))
    }
}
