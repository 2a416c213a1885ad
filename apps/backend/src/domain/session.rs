//! The per-game finite-state machine.
//!
//! `GameSession` owns one game's authoritative state and enforces the
//! lifecycle `Waiting -> InProgress -> Completed`. All operations are
//! synchronous and validate their input before mutating anything.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::player::{Player, PlayerId};
use crate::domain::policy::{GuessMode, Verdict};
use crate::domain::rules::{normalize_word, GUESS_AWARD, UNTITLED_GAME};
use crate::domain::snapshot::{GameSnapshot, GameSummary};
use crate::domain::state::GamePhase;
use crate::errors::domain::{DomainError, PreconditionKind};

/// Per-session rules fixed at creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRules {
    pub guess_mode: GuessMode,
    /// Admit new players while the game is in progress (score starts at 0).
    pub allow_late_join: bool,
}

impl SessionRules {
    pub fn new(guess_mode: GuessMode, allow_late_join: bool) -> Self {
        Self {
            guess_mode,
            allow_late_join,
        }
    }
}

/// A word from the list that has been guessed, with who guessed it first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessedWord {
    pub word: String,
    pub guesser: String,
}

/// Outcome of the most recent guess attempt, correct or not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LastPlayed {
    pub player_id: PlayerId,
    pub display_name: String,
    pub guessed_word: String,
    pub correct: bool,
}

/// What a call to [`GameSession::submit_guess`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessOutcome {
    /// The guessing player after scoring.
    pub player: Player,
    pub guessed_word: String,
    pub correct: bool,
    /// Points added by this guess (0 for misses and repeats).
    pub awarded: u32,
    /// The game completed as a result of this guess.
    pub completed: bool,
}

#[derive(Debug, Clone)]
pub struct GameSession {
    id: String,
    title: String,
    words: Vec<String>,
    phase: GamePhase,
    players: Vec<Player>,
    guessed_words: Vec<GuessedWord>,
    last_played: Option<LastPlayed>,
    rules: SessionRules,
}

fn require_text(raw: &str, field: &str) -> Result<String, DomainError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(DomainError::invalid_argument(format!(
            "{field} must not be empty."
        )));
    }
    Ok(trimmed.to_string())
}

impl GameSession {
    pub fn new(id: impl Into<String>, rules: SessionRules) -> Self {
        Self {
            id: id.into(),
            title: String::new(),
            words: Vec::new(),
            phase: GamePhase::Waiting,
            players: Vec::new(),
            guessed_words: Vec::new(),
            last_played: None,
            rules,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn guessed_words(&self) -> &[GuessedWord] {
        &self.guessed_words
    }

    pub fn last_played(&self) -> Option<&LastPlayed> {
        self.last_played.as_ref()
    }

    pub fn rules(&self) -> SessionRules {
        self.rules
    }

    pub fn set_title(&mut self, title: &str) -> Result<(), DomainError> {
        let title = require_text(title, "title")?;
        if self.phase != GamePhase::Waiting {
            return Err(DomainError::invalid_state(
                "Cannot set game title once the game has started.",
            ));
        }
        self.title = title;
        Ok(())
    }

    /// Join by display name. Re-adding a known name returns the existing player.
    pub fn add_player(&mut self, display_name: &str) -> Result<Player, DomainError> {
        let name = require_text(display_name, "displayName")?;
        match self.phase {
            GamePhase::Waiting => {}
            GamePhase::InProgress if self.rules.allow_late_join => {}
            GamePhase::InProgress => {
                return Err(DomainError::invalid_state(
                    "Cannot join once the game has started.",
                ))
            }
            GamePhase::Completed => {
                return Err(DomainError::invalid_state(
                    "Cannot join a completed game.",
                ))
            }
        }

        if let Some(existing) = self.players.iter().find(|p| p.display_name == name) {
            return Ok(existing.clone());
        }
        let player = Player::new(name);
        self.players.push(player.clone());
        Ok(player)
    }

    /// Append a word. Returns `false` when the word is already listed.
    pub fn add_word(&mut self, word: &str) -> Result<bool, DomainError> {
        let word = require_text(word, "word")?;
        if self.phase != GamePhase::Waiting {
            return Err(DomainError::invalid_state(
                "Cannot add words once the game has started.",
            ));
        }
        let key = normalize_word(&word);
        if self.words.iter().any(|w| normalize_word(w) == key) {
            return Ok(false);
        }
        self.words.push(word);
        Ok(true)
    }

    pub fn start(&mut self) -> Result<(), DomainError> {
        match self.phase {
            GamePhase::Waiting => {}
            GamePhase::InProgress => {
                return Err(DomainError::invalid_state("Game has already started."))
            }
            GamePhase::Completed => {
                return Err(DomainError::invalid_state("Game is already completed."))
            }
        }
        if self.players.is_empty() {
            return Err(DomainError::PreconditionFailed(PreconditionKind::NoPlayers));
        }
        if self.words.is_empty() {
            return Err(DomainError::PreconditionFailed(PreconditionKind::NoWords));
        }
        self.phase = GamePhase::InProgress;
        self.guessed_words.clear();
        Ok(())
    }

    /// Record a guess by the player referenced by id (or display name).
    pub fn submit_guess(
        &mut self,
        player_ref: &str,
        guess: &str,
    ) -> Result<GuessOutcome, DomainError> {
        let player_ref = require_text(player_ref, "playerId")?;
        let guess = require_text(guess, "guessedWord")?;
        if self.phase != GamePhase::InProgress {
            return Err(DomainError::invalid_state("Game is not in progress."));
        }
        let idx = self
            .player_index(&player_ref)
            .ok_or_else(|| DomainError::player_not_found(&player_ref))?;

        let policy = self.rules.guess_mode.policy();
        let verdict = policy.judge(&self.words, &self.guessed_words, &guess);

        let mut awarded = 0;
        if let Verdict::Hit { index } = verdict {
            awarded = GUESS_AWARD;
            self.players[idx].score += GUESS_AWARD;
            self.guessed_words.push(GuessedWord {
                word: self.words[index].clone(),
                guesser: self.players[idx].display_name.clone(),
            });
        }

        let player = self.players[idx].clone();
        self.last_played = Some(LastPlayed {
            player_id: player.id,
            display_name: player.display_name.clone(),
            guessed_word: guess.clone(),
            correct: verdict.is_correct(),
        });

        let completed = policy.is_complete(&self.words, &self.guessed_words);
        if completed {
            self.phase = GamePhase::Completed;
        }

        Ok(GuessOutcome {
            player,
            guessed_word: guess,
            correct: verdict.is_correct(),
            awarded,
            completed,
        })
    }

    pub fn find_player(&self, player_ref: &str) -> Option<&Player> {
        self.player_index(player_ref.trim()).map(|i| &self.players[i])
    }

    fn player_index(&self, player_ref: &str) -> Option<usize> {
        if let Ok(id) = Uuid::parse_str(player_ref) {
            if let Some(i) = self.players.iter().position(|p| p.id == id) {
                return Some(i);
            }
        }
        self.players
            .iter()
            .position(|p| p.display_name == player_ref)
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            game_id: self.id.clone(),
            current_state: self.phase,
            guess_mode: self.rules.guess_mode,
            game_title: self.title.clone(),
            words: self.words.clone(),
            players: self.players.clone(),
            guessed_words: self.guessed_words.clone(),
            last_played: self.last_played.clone(),
        }
    }

    pub fn summary(&self) -> GameSummary {
        let title = if self.title.is_empty() {
            UNTITLED_GAME.to_string()
        } else {
            self.title.clone()
        };
        GameSummary {
            id: self.id.clone(),
            title,
        }
    }
}
