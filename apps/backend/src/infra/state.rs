use std::sync::Arc;
use std::time::Duration;

use crate::commentary::{ChatCommentator, Commentator};
use crate::config::AppConfig;
use crate::corpus::{FileCorpus, StaticCorpus, WordCorpus};
use crate::domain::SessionRules;
use crate::registry::GameRegistry;
use crate::services::game_factory::GameFactory;
use crate::state::app_state::AppState;

const DEFAULT_COMMENTARY_TIMEOUT: Duration = Duration::from_secs(5);

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    corpus: Option<Arc<dyn WordCorpus>>,
    commentator: Option<Arc<dyn Commentator>>,
    random_rules: SessionRules,
    seed: Option<u64>,
    commentary_timeout: Duration,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            corpus: None,
            commentator: None,
            random_rules: SessionRules::new(Default::default(), true),
            seed: None,
            commentary_timeout: DEFAULT_COMMENTARY_TIMEOUT,
        }
    }

    /// Production wiring: file corpus plus the chat commentator when an API key is set.
    pub fn with_config(mut self, config: &AppConfig) -> Self {
        self.corpus = Some(Arc::new(FileCorpus::new(
            config.corpus_path.clone(),
            config.corpus_timeout,
        )));
        self.random_rules = config.random_game_rules;
        if let Some(c) = &config.commentary {
            self.commentator = Some(Arc::new(ChatCommentator::new(
                &c.base_url,
                &c.model,
                &c.api_key,
                c.timeout,
            )));
            self.commentary_timeout = c.timeout;
        }
        self
    }

    pub fn with_corpus<C>(mut self, corpus: C) -> Self
    where
        C: WordCorpus + 'static,
    {
        self.corpus = Some(Arc::new(corpus));
        self
    }

    pub fn with_commentator<C>(mut self, commentator: C) -> Self
    where
        C: Commentator + 'static,
    {
        self.commentator = Some(Arc::new(commentator));
        self
    }

    pub fn with_random_rules(mut self, rules: SessionRules) -> Self {
        self.random_rules = rules;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_commentary_timeout(mut self, timeout: Duration) -> Self {
        self.commentary_timeout = timeout;
        self
    }

    pub fn build(self) -> AppState {
        let corpus = self
            .corpus
            .unwrap_or_else(|| Arc::new(StaticCorpus::default()) as Arc<dyn WordCorpus>);
        let factory = GameFactory::new(corpus, self.random_rules, self.seed);
        AppState::new(
            Arc::new(GameRegistry::new()),
            Arc::new(factory),
            self.commentator,
            self.commentary_timeout,
        )
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
