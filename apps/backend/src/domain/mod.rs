//! Domain layer: pure game logic types and helpers.

pub mod player;
pub mod policy;
pub mod rules;
pub mod session;
pub mod snapshot;
pub mod state;

#[cfg(test)]
mod tests_policy;
#[cfg(test)]
mod tests_props_scoring;
#[cfg(test)]
mod tests_session;

// Re-exports for ergonomics
pub use player::{Player, PlayerId};
pub use policy::{GuessMode, GuessPolicy, OpenSetGuessPolicy, SequentialGuessPolicy, Verdict};
pub use rules::{normalize_word, GUESS_AWARD};
pub use session::{GameSession, GuessOutcome, GuessedWord, LastPlayed, SessionRules};
pub use snapshot::{GameSnapshot, GameSummary};
pub use state::GamePhase;
