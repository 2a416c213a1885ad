use core::fmt;

use serde::{Deserialize, Serialize};

/// Lifecycle phases of a game session. Transitions only move forward:
/// `Waiting -> InProgress -> Completed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// Collecting title, words and players.
    #[serde(rename = "WAITING_FOR_PLAYERS")]
    Waiting,
    /// Accepting guesses.
    #[serde(rename = "GAME_IN_PROGRESS")]
    InProgress,
    /// Every word guessed; terminal.
    #[serde(rename = "GAME_COMPLETED")]
    Completed,
}

impl GamePhase {
    pub const fn as_str(self) -> &'static str {
        match self {
            GamePhase::Waiting => "WAITING_FOR_PLAYERS",
            GamePhase::InProgress => "GAME_IN_PROGRESS",
            GamePhase::Completed => "GAME_COMPLETED",
        }
    }
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
