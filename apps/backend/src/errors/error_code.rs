//! Error codes for the word game API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in HTTP responses.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request Validation
    /// Invalid or blank game ID
    InvalidGameId,
    /// Empty or malformed field
    InvalidArgument,
    /// Malformed request body
    BadRequest,

    // Game rules
    /// Operation not allowed in the current game phase
    InvalidState,
    /// Start requirements not met
    PreconditionFailed,

    // Resource Not Found
    /// Game not found
    GameNotFound,
    /// Player not found
    PlayerNotFound,

    // Conflicts
    /// Game id already taken
    GameAlreadyExists,

    // System Errors
    /// Word corpus could not be read
    CorpusUnavailable,
    /// Word corpus has no usable records
    CorpusEmpty,
    /// Internal server error
    Internal,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidGameId => "INVALID_GAME_ID",
            Self::InvalidArgument => "INVALID_ARGUMENT",
            Self::BadRequest => "BAD_REQUEST",

            Self::InvalidState => "INVALID_STATE",
            Self::PreconditionFailed => "PRECONDITION_FAILED",

            Self::GameNotFound => "GAME_NOT_FOUND",
            Self::PlayerNotFound => "PLAYER_NOT_FOUND",

            Self::GameAlreadyExists => "GAME_ALREADY_EXISTS",

            Self::CorpusUnavailable => "CORPUS_UNAVAILABLE",
            Self::CorpusEmpty => "CORPUS_EMPTY",
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
