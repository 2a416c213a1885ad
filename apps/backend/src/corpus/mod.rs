//! Word corpus: the external source of `title|word1, word2, ...` records
//! that random games are built from.

pub mod file;

use async_trait::async_trait;

use crate::errors::domain::DomainError;

pub use file::FileCorpus;

/// One selectable game template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusRecord {
    pub title: String,
    pub words: Vec<String>,
}

/// Parse corpus text. Lines without `|` are ignored, as are records with an
/// empty title or no words.
pub fn parse_corpus(text: &str) -> Vec<CorpusRecord> {
    text.lines().filter_map(parse_line).collect()
}

fn parse_line(line: &str) -> Option<CorpusRecord> {
    let (title, words) = line.split_once('|')?;
    let title = title.trim();
    if title.is_empty() {
        return None;
    }
    let words: Vec<String> = words
        .split(',')
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect();
    if words.is_empty() {
        return None;
    }
    Some(CorpusRecord {
        title: title.to_string(),
        words,
    })
}

#[async_trait]
pub trait WordCorpus: Send + Sync {
    /// Load every valid record. Fails with `CorpusUnavailable` when the
    /// underlying source cannot be read.
    async fn load(&self) -> Result<Vec<CorpusRecord>, DomainError>;
}

/// Corpus held in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticCorpus {
    text: String,
}

impl StaticCorpus {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[async_trait]
impl WordCorpus for StaticCorpus {
    async fn load(&self) -> Result<Vec<CorpusRecord>, DomainError> {
        Ok(parse_corpus(&self.text))
    }
}
