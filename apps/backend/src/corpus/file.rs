use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};

use super::{parse_corpus, CorpusRecord, WordCorpus};
use crate::errors::domain::DomainError;

/// Corpus backed by a text file on disk, read on every load so edits are
/// picked up without a restart.
#[derive(Debug, Clone)]
pub struct FileCorpus {
    path: PathBuf,
    timeout: Duration,
}

impl FileCorpus {
    pub fn new(path: impl Into<PathBuf>, timeout: Duration) -> Self {
        Self {
            path: path.into(),
            timeout,
        }
    }
}

#[async_trait]
impl WordCorpus for FileCorpus {
    async fn load(&self) -> Result<Vec<CorpusRecord>, DomainError> {
        let name = self.path.display().to_string();
        let text = match tokio::time::timeout(self.timeout, tokio::fs::read_to_string(&self.path))
            .await
        {
            Ok(Ok(text)) => text,
            Ok(Err(e)) => {
                warn!(path = %name, error = %e, "Failed to read word corpus");
                return Err(DomainError::corpus_unavailable(format!(
                    "Failed to read {name}"
                )));
            }
            Err(_) => {
                warn!(path = %name, timeout_ms = self.timeout.as_millis() as u64, "Word corpus read timed out");
                return Err(DomainError::corpus_unavailable(format!(
                    "Timed out reading {name}"
                )));
            }
        };

        let records = parse_corpus(&text);
        debug!(path = %name, records = records.len(), "Loaded word corpus");
        Ok(records)
    }
}
