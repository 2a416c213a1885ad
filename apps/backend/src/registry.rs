//! In-memory registry of game sessions.
//!
//! Each session sits behind its own mutex; the id map sits behind a separate
//! read-write lock. Callers clone a [`GameHandle`] out of the registry and
//! release the map lock before locking the session.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use uuid::Uuid;

use crate::domain::{GameSession, GameSummary, SessionRules};
use crate::errors::domain::DomainError;

pub type GameHandle = Arc<Mutex<GameSession>>;

/// Ids that collide with the fixed `/api` route segments.
pub const RESERVED_GAME_IDS: [&str; 2] = ["games", "create-random-game"];

#[derive(Default)]
struct RegistryInner {
    order: Vec<String>,
    games: HashMap<String, GameHandle>,
}

#[derive(Default)]
pub struct GameRegistry {
    inner: RwLock<RegistryInner>,
}

impl GameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve a caller-supplied id, or generate one.
    pub fn resolve_id(requested: Option<&str>) -> Result<String, DomainError> {
        match requested {
            None => Ok(Uuid::new_v4().to_string()),
            Some(raw) => {
                let id = raw.trim();
                if id.is_empty() {
                    return Err(DomainError::invalid_argument("gameId must not be empty."));
                }
                if RESERVED_GAME_IDS.contains(&id) {
                    return Err(DomainError::invalid_argument(format!(
                        "gameId '{id}' is reserved."
                    )));
                }
                Ok(id.to_string())
            }
        }
    }

    /// Register a fresh, empty session in the waiting phase.
    pub fn create(
        &self,
        requested_id: Option<&str>,
        rules: SessionRules,
    ) -> Result<GameHandle, DomainError> {
        let id = Self::resolve_id(requested_id)?;
        self.insert(GameSession::new(id, rules))
    }

    /// Register a fully built session. Fails if its id is taken.
    pub fn insert(&self, session: GameSession) -> Result<GameHandle, DomainError> {
        let id = session.id().to_string();
        let mut inner = self.inner.write();
        if inner.games.contains_key(&id) {
            return Err(DomainError::already_exists(format!(
                "Game '{id}' already exists."
            )));
        }
        let handle: GameHandle = Arc::new(Mutex::new(session));
        inner.order.push(id.clone());
        inner.games.insert(id, Arc::clone(&handle));
        Ok(handle)
    }

    pub fn get(&self, id: &str) -> Result<GameHandle, DomainError> {
        self.inner
            .read()
            .games
            .get(id)
            .cloned()
            .ok_or_else(|| DomainError::game_not_found(id))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.inner.read().games.contains_key(id)
    }

    /// `{id, title}` of every game, in insertion order.
    pub fn list(&self) -> Vec<GameSummary> {
        let handles: Vec<GameHandle> = {
            let inner = self.inner.read();
            inner
                .order
                .iter()
                .filter_map(|id| inner.games.get(id).cloned())
                .collect()
        };
        handles.iter().map(|h| h.lock().summary()).collect()
    }

    pub fn len(&self) -> usize {
        self.inner.read().order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
