//! Builds started games from a random corpus record.

use std::sync::Arc;

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use tracing::info;

use crate::corpus::{CorpusRecord, WordCorpus};
use crate::domain::{GameSession, SessionRules};
use crate::errors::domain::DomainError;
use crate::registry::{GameHandle, GameRegistry};

/// A registered, already started random game.
pub struct CreatedGame {
    pub handle: GameHandle,
    pub game_id: String,
    pub title: String,
    pub words: Vec<String>,
}

pub struct GameFactory {
    corpus: Arc<dyn WordCorpus>,
    rules: SessionRules,
    /// Interior mutability: `create_random` takes `&self`.
    rng: Mutex<StdRng>,
}

impl GameFactory {
    /// `seed` makes record selection reproducible; `None` uses OS entropy.
    pub fn new(corpus: Arc<dyn WordCorpus>, rules: SessionRules, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            corpus,
            rules,
            rng: Mutex::new(rng),
        }
    }

    pub fn rules(&self) -> SessionRules {
        self.rules
    }

    /// Pick a corpus record, build a session with `creator` as the first
    /// player, start it and register it. Nothing is registered on failure.
    pub async fn create_random(
        &self,
        registry: &GameRegistry,
        requested_id: Option<&str>,
        creator: &str,
    ) -> Result<CreatedGame, DomainError> {
        let game_id = GameRegistry::resolve_id(requested_id)?;
        if creator.trim().is_empty() {
            return Err(DomainError::invalid_argument("displayName must not be empty."));
        }
        if registry.contains(&game_id) {
            return Err(DomainError::already_exists(format!(
                "Game '{game_id}' already exists."
            )));
        }

        let records = self.corpus.load().await?;
        let record = self
            .pick(&records)
            .ok_or_else(|| DomainError::corpus_empty("Word corpus has no usable records."))?;

        let session = build_session(game_id, record, creator, self.rules)?;
        let title = session.title().to_string();
        let words = session.words().to_vec();
        let game_id = session.id().to_string();
        let handle = registry.insert(session)?;

        info!(game_id = %game_id, title = %title, words = words.len(), "Random game created");

        Ok(CreatedGame {
            handle,
            game_id,
            title,
            words,
        })
    }

    fn pick<'r>(&self, records: &'r [CorpusRecord]) -> Option<&'r CorpusRecord> {
        let mut rng = self.rng.lock();
        records.choose(&mut *rng)
    }
}

fn build_session(
    game_id: String,
    record: &CorpusRecord,
    creator: &str,
    rules: SessionRules,
) -> Result<GameSession, DomainError> {
    let mut session = GameSession::new(game_id, rules);
    session.set_title(&record.title)?;
    session.add_player(creator)?;
    for word in &record.words {
        session.add_word(word)?;
    }
    session.start()?;
    Ok(session)
}
