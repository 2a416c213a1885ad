//! Game orchestration for the HTTP layer.
//!
//! Every FSM call happens under the session lock and the lock is released
//! before any await point. Commentary runs after the guess is committed.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::commentary::{introduce, CommentaryRequest};
use crate::domain::{GameSnapshot, GameSummary, Player, SessionRules};
use crate::errors::domain::DomainError;
use crate::registry::GameHandle;
use crate::state::app_state::AppState;

/// A random game as returned to its creator.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RandomGame {
    pub game_id: String,
    pub game_title: String,
    pub words: Vec<String>,
    pub introduction: String,
}

/// Result of a guess: the committed state plus optional commentary.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuessReport {
    pub game_state: GameSnapshot,
    pub commentary: Option<String>,
}

/// Game domain service.
pub struct GameService<'a> {
    state: &'a AppState,
}

impl<'a> GameService<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    pub fn create_game(
        &self,
        requested_id: Option<&str>,
        rules: SessionRules,
    ) -> Result<GameSnapshot, DomainError> {
        let handle = self.state.registry.create(requested_id, rules)?;
        let snapshot = handle.lock().snapshot();
        info!(game_id = %snapshot.game_id, mode = %rules.guess_mode, "Game created");
        Ok(snapshot)
    }

    pub async fn create_random(
        &self,
        requested_id: Option<&str>,
        creator: &str,
    ) -> Result<RandomGame, DomainError> {
        let created = self
            .state
            .factory
            .create_random(&self.state.registry, requested_id, creator)
            .await?;
        Ok(RandomGame {
            introduction: introduce(&created.title),
            game_id: created.game_id,
            game_title: created.title,
            words: created.words,
        })
    }

    pub fn list(&self) -> Vec<GameSummary> {
        self.state.registry.list()
    }

    pub fn state(&self, game: &GameHandle) -> GameSnapshot {
        game.lock().snapshot()
    }

    pub fn set_title(&self, game: &GameHandle, title: &str) -> Result<(), DomainError> {
        let mut session = game.lock();
        session.set_title(title)?;
        info!(game_id = %session.id(), title = %session.title(), "Game title set");
        Ok(())
    }

    pub fn add_player(&self, game: &GameHandle, display_name: &str) -> Result<Player, DomainError> {
        let mut session = game.lock();
        let before = session.players().len();
        let player = session.add_player(display_name)?;
        if session.players().len() > before {
            info!(game_id = %session.id(), player = %player.display_name, phase = %session.phase(), "Player joined");
        }
        Ok(player)
    }

    pub fn add_word(&self, game: &GameHandle, word: &str) -> Result<bool, DomainError> {
        let mut session = game.lock();
        let added = session.add_word(word)?;
        debug!(game_id = %session.id(), added, words = session.words().len(), "Word submitted");
        Ok(added)
    }

    pub fn start(&self, game: &GameHandle) -> Result<(), DomainError> {
        let mut session = game.lock();
        session.start()?;
        info!(
            game_id = %session.id(),
            players = session.players().len(),
            words = session.words().len(),
            "Game started"
        );
        Ok(())
    }

    pub async fn submit_guess(
        &self,
        game: &GameHandle,
        player_ref: &str,
        guessed_word: &str,
    ) -> Result<GuessReport, DomainError> {
        let (snapshot, request) = {
            let mut session = game.lock();
            let outcome = session.submit_guess(player_ref, guessed_word)?;
            info!(
                game_id = %session.id(),
                player = %outcome.player.display_name,
                correct = outcome.correct,
                awarded = outcome.awarded,
                completed = outcome.completed,
                "Guess recorded"
            );
            let request = CommentaryRequest {
                game_title: session.title().to_string(),
                words: session.words().to_vec(),
                player_name: outcome.player.display_name,
                guessed_word: outcome.guessed_word,
                is_correct: outcome.correct,
            };
            (session.snapshot(), request)
        };

        let commentary = self.commentary(&snapshot.game_id, &request).await;
        Ok(GuessReport {
            game_state: snapshot,
            commentary,
        })
    }

    async fn commentary(&self, game_id: &str, request: &CommentaryRequest) -> Option<String> {
        let commentator = self.state.commentator.as_ref()?;
        match tokio::time::timeout(self.state.commentary_timeout, commentator.comment(request))
            .await
        {
            Ok(Ok(text)) => Some(text),
            Ok(Err(e)) => {
                warn!(game_id = %game_id, error = %e, "Commentary failed");
                None
            }
            Err(_) => {
                warn!(game_id = %game_id, "Commentary timed out");
                None
            }
        }
    }
}
