//! Flavor-text commentary attached to guess responses.
//!
//! Commentary is additive: it runs after the guess has been committed and a
//! failure only drops the text from the response.

pub mod chat;

use async_trait::async_trait;
use thiserror::Error;

pub use chat::ChatCommentator;

/// Everything a commentator knows about a guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentaryRequest {
    pub game_title: String,
    pub words: Vec<String>,
    pub player_name: String,
    pub guessed_word: String,
    pub is_correct: bool,
}

#[derive(Debug, Error)]
pub enum CommentaryError {
    #[error("commentary request failed: {0}")]
    RequestFailed(String),
    #[error("commentary response invalid: {0}")]
    InvalidResponse(String),
    #[error("commentary timed out")]
    Timeout,
}

#[async_trait]
pub trait Commentator: Send + Sync {
    async fn comment(&self, request: &CommentaryRequest) -> Result<String, CommentaryError>;
}

/// Announcement returned when a random game is created.
pub fn introduce(title: &str) -> String {
    format!("Game introduced: {title}")
}
