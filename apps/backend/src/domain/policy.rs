//! Guess adjudication strategies.
//!
//! A session picks one [`GuessMode`] at creation time; the mode maps to a
//! stateless [`GuessPolicy`] that decides whether a guess hits a new word,
//! repeats an already guessed one, or misses.

use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::rules::normalize_word;
use crate::domain::session::GuessedWord;

/// Result of judging a single guess against the word list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Not a word that counts right now.
    Miss,
    /// Correct, but already guessed earlier; no award.
    Repeat,
    /// First correct guess of `words[index]`.
    Hit { index: usize },
}

impl Verdict {
    pub fn is_correct(self) -> bool {
        !matches!(self, Verdict::Miss)
    }
}

pub trait GuessPolicy: Send + Sync {
    fn name(&self) -> &'static str;

    /// Judge `guess` given the full word list and the words guessed so far.
    fn judge(&self, words: &[String], guessed: &[GuessedWord], guess: &str) -> Verdict;

    /// Whether the guessed words cover the whole list.
    fn is_complete(&self, words: &[String], guessed: &[GuessedWord]) -> bool {
        !words.is_empty() && guessed.len() >= words.len()
    }
}

fn already_guessed(guessed: &[GuessedWord], key: &str) -> bool {
    guessed.iter().any(|g| normalize_word(&g.word) == key)
}

/// Any remaining word may be guessed, in any order.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenSetGuessPolicy;

impl GuessPolicy for OpenSetGuessPolicy {
    fn name(&self) -> &'static str {
        "open_set"
    }

    fn judge(&self, words: &[String], guessed: &[GuessedWord], guess: &str) -> Verdict {
        let key = normalize_word(guess);
        match words.iter().position(|w| normalize_word(w) == key) {
            None => Verdict::Miss,
            Some(_) if already_guessed(guessed, &key) => Verdict::Repeat,
            Some(index) => Verdict::Hit { index },
        }
    }
}

/// Words must be guessed in list order; only the next word counts.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialGuessPolicy;

impl GuessPolicy for SequentialGuessPolicy {
    fn name(&self) -> &'static str {
        "sequential"
    }

    fn judge(&self, words: &[String], guessed: &[GuessedWord], guess: &str) -> Verdict {
        let key = normalize_word(guess);
        if already_guessed(guessed, &key) {
            return Verdict::Repeat;
        }
        // Guessed words always form a prefix of the list in this mode.
        let next = guessed.len();
        match words.get(next) {
            Some(word) if normalize_word(word) == key => Verdict::Hit { index: next },
            _ => Verdict::Miss,
        }
    }
}

/// Selects the adjudication policy of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuessMode {
    #[default]
    OpenSet,
    Sequential,
}

impl GuessMode {
    pub fn policy(self) -> &'static dyn GuessPolicy {
        match self {
            GuessMode::OpenSet => &OpenSetGuessPolicy,
            GuessMode::Sequential => &SequentialGuessPolicy,
        }
    }
}

impl fmt::Display for GuessMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.policy().name())
    }
}

impl FromStr for GuessMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "open_set" | "openset" => Ok(GuessMode::OpenSet),
            "sequential" => Ok(GuessMode::Sequential),
            other => Err(format!("unknown guess mode '{other}'")),
        }
    }
}
