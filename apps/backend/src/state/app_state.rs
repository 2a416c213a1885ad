use std::sync::Arc;
use std::time::Duration;

use crate::commentary::Commentator;
use crate::registry::GameRegistry;
use crate::services::game_factory::GameFactory;

/// Application state containing shared resources
#[derive(Clone)]
pub struct AppState {
    /// All live game sessions
    pub registry: Arc<GameRegistry>,
    /// Random game construction from the word corpus
    pub factory: Arc<GameFactory>,
    /// Optional flavor-text collaborator
    pub commentator: Option<Arc<dyn Commentator>>,
    /// Upper bound on a single commentary call
    pub commentary_timeout: Duration,
}

impl AppState {
    pub fn new(
        registry: Arc<GameRegistry>,
        factory: Arc<GameFactory>,
        commentator: Option<Arc<dyn Commentator>>,
        commentary_timeout: Duration,
    ) -> Self {
        Self {
            registry,
            factory,
            commentator,
            commentary_timeout,
        }
    }
}
