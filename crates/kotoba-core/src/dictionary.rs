use crate::content::RawEntry;
use crate::types::{DictionaryEntry, SearchVariant};

/// One loaded dictionary edition.
///
/// Implementations own an index built once at construction and are read-only
/// afterwards, so a shared reference can serve any number of concurrent lookups.
pub trait DictionarySource: Send + Sync {
    /// Edition name used for attribution, e.g. "english"
    fn name(&self) -> &str;

    /// Exact-key lookup, empty on miss
    fn find(&self, key: &str) -> Vec<&RawEntry>;

    /// Normalize this edition's record shape into the canonical entry
    fn parse(&self, entry: &RawEntry) -> DictionaryEntry;

    /// Number of records held by the source
    fn entry_count(&self) -> usize;
}

/// Fans each search variant out to every registered source
#[derive(Default)]
pub struct DictionaryAggregator {
    sources: Vec<Box<dyn DictionarySource>>,
}

impl DictionaryAggregator {
    pub fn new(sources: Vec<Box<dyn DictionarySource>>) -> Self {
        Self { sources }
    }

    pub fn push(&mut self, source: Box<dyn DictionarySource>) {
        self.sources.push(source);
    }

    pub fn sources(&self) -> impl Iterator<Item = &dyn DictionarySource> {
        self.sources.iter().map(|s| &**s)
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Results grouped by variant, then source registration order, then hit order.
    /// Nothing is merged or ranked: the same word found twice is returned twice.
    pub fn find(&self, variants: &[SearchVariant]) -> Vec<DictionaryEntry> {
        let mut results = Vec::new();

        for key in variants.iter().filter_map(SearchVariant::key) {
            for source in &self.sources {
                for raw in source.find(key) {
                    let mut entry = source.parse(raw);
                    entry.dictionary = Some(source.name().to_string());
                    results.push(entry);
                }
            }
        }

        results
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
