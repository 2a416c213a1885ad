//! Public snapshot API for observing game state without exposing internals.

use serde::{Deserialize, Serialize};

use crate::domain::player::Player;
use crate::domain::policy::GuessMode;
use crate::domain::session::{GuessedWord, LastPlayed};
use crate::domain::state::GamePhase;

/// Immutable view of one session, serialized as the game-state payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub game_id: String,
    pub current_state: GamePhase,
    pub guess_mode: GuessMode,
    pub game_title: String,
    pub words: Vec<String>,
    pub players: Vec<Player>,
    pub guessed_words: Vec<GuessedWord>,
    pub last_played: Option<LastPlayed>,
}

impl GameSnapshot {
    pub fn total_score(&self) -> u32 {
        self.players.iter().map(|p| p.score).sum()
    }

    pub fn player(&self, display_name: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.display_name == display_name)
    }
}

/// Entry of the game listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub id: String,
    pub title: String,
}
