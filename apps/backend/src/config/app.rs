//! Runtime configuration read from environment variables.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::commentary::chat::{DEFAULT_COMMENTARY_BASE_URL, DEFAULT_COMMENTARY_MODEL};
use crate::domain::{GuessMode, SessionRules};
use crate::error::AppError;
use crate::middleware::cors::parse_allowed_origins;

/// Settings for the optional commentary collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentaryConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub timeout: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub corpus_path: PathBuf,
    pub corpus_timeout: Duration,
    /// Rules applied to games built from the corpus.
    pub random_game_rules: SessionRules,
    /// `None` disables commentary.
    pub commentary: Option<CommentaryConfig>,
    /// Empty means the localhost fallback.
    pub cors_allowed_origins: Vec<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (environment in production).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let host = var("BACKEND_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = parse_or(&var, "BACKEND_PORT", 3000u16)?;
        let corpus_path = PathBuf::from(var("CORPUS_PATH").unwrap_or_else(|| "pipes.txt".into()));
        let corpus_timeout = Duration::from_millis(parse_or(&var, "CORPUS_TIMEOUT_MS", 2000u64)?);

        let guess_mode = match var("RANDOM_GAME_MODE") {
            Some(raw) => raw
                .parse::<GuessMode>()
                .map_err(|e| AppError::config(format!("RANDOM_GAME_MODE: {e}")))?,
            None => GuessMode::OpenSet,
        };
        let allow_late_join = parse_or(&var, "RANDOM_GAME_LATE_JOIN", true)?;

        let commentary = match var("COMMENTARY_API_KEY").or_else(|| var("OPENAI_API_KEY")) {
            Some(api_key) => Some(CommentaryConfig {
                api_key,
                base_url: var("COMMENTARY_BASE_URL")
                    .unwrap_or_else(|| DEFAULT_COMMENTARY_BASE_URL.to_string()),
                model: var("COMMENTARY_MODEL")
                    .unwrap_or_else(|| DEFAULT_COMMENTARY_MODEL.to_string()),
                timeout: Duration::from_millis(parse_or(&var, "COMMENTARY_TIMEOUT_MS", 5000u64)?),
            }),
            None => None,
        };

        let cors_allowed_origins = var("CORS_ALLOWED_ORIGINS")
            .map(|raw| parse_allowed_origins(&raw))
            .unwrap_or_default();

        Ok(Self {
            host,
            port,
            corpus_path,
            corpus_timeout,
            random_game_rules: SessionRules::new(guess_mode, allow_late_join),
            commentary,
            cors_allowed_origins,
        })
    }
}

fn parse_or<T, V>(var: &V, key: &str, default: T) -> Result<T, AppError>
where
    T: std::str::FromStr,
    V: Fn(&str) -> Option<String>,
{
    match var(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| AppError::config(format!("{key} has an invalid value: '{raw}'"))),
        None => Ok(default),
    }
}
