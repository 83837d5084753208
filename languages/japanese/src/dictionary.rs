use std::collections::HashMap;

use kotoba_config::dictionary::{ContentShape, EditionConfig};
use kotoba_core::content::{RawContent, RawEntry};
use kotoba_core::dictionary::DictionarySource;
use kotoba_core::types::DictionaryEntry;

use crate::structured::extract_meanings;

/// Term bank records with exact-match indices, built once and read-only after
pub struct TermIndex {
    entries: Vec<RawEntry>,
    word_index: HashMap<String, Vec<usize>>,
    reading_index: HashMap<String, Vec<usize>>,
}

impl TermIndex {
    pub fn build(entries: Vec<RawEntry>, index_readings: bool) -> Self {
        let mut word_index: HashMap<String, Vec<usize>> = HashMap::new();
        let mut reading_index: HashMap<String, Vec<usize>> = HashMap::new();

        for (idx, entry) in entries.iter().enumerate() {
            word_index.entry(entry.word.clone()).or_default().push(idx);
            if index_readings && !entry.reading.is_empty() {
                reading_index.entry(entry.reading.clone()).or_default().push(idx);
            }
        }

        Self {
            entries,
            word_index,
            reading_index,
        }
    }

    /// Hits in load order; a record matching by both word and reading appears once
    pub fn find(&self, key: &str) -> Vec<&RawEntry> {
        let mut indices: Vec<usize> = Vec::new();

        if let Some(hits) = self.word_index.get(key) {
            indices.extend(hits);
        }
        if let Some(hits) = self.reading_index.get(key) {
            indices.extend(hits);
        }

        indices.sort_unstable();
        indices.dedup();

        indices
            .into_iter()
            .filter_map(|idx| self.entries.get(idx))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Edition whose records carry plain meaning lists
pub struct FlatDictionary {
    name: String,
    index: TermIndex,
}

impl FlatDictionary {
    pub fn new(name: impl Into<String>, index: TermIndex) -> Self {
        Self {
            name: name.into(),
            index,
        }
    }
}

impl DictionarySource for FlatDictionary {
    fn name(&self) -> &str {
        &self.name
    }

    fn find(&self, key: &str) -> Vec<&RawEntry> {
        self.index.find(key)
    }

    fn parse(&self, entry: &RawEntry) -> DictionaryEntry {
        DictionaryEntry::new(
            entry.word.clone(),
            entry.reading.clone(),
            entry.kind.clone(),
            flat_meanings(&entry.content),
        )
    }

    fn entry_count(&self) -> usize {
        self.index.len()
    }
}

/// Edition whose glossaries are structured-content markup.
///
/// `forms` records still ship plain lists and go through the flat path.
pub struct StructuredDictionary {
    name: String,
    index: TermIndex,
}

impl StructuredDictionary {
    pub fn new(name: impl Into<String>, index: TermIndex) -> Self {
        Self {
            name: name.into(),
            index,
        }
    }

    fn meanings(&self, entry: &RawEntry) -> Vec<String> {
        match &entry.content {
            RawContent::Flat(meanings) => meanings.clone(),
            RawContent::Structured(blocks) => extract_meanings(blocks),
            RawContent::Encoded(text) => match serde_json::from_str::<RawContent>(text) {
                Ok(RawContent::Flat(meanings)) => meanings,
                Ok(RawContent::Structured(blocks)) => extract_meanings(&blocks),
                Ok(_) => Vec::new(),
                Err(e) => {
                    tracing::warn!("Failed to decode content of '{}' in {}: {}", entry.word, self.name, e);
                    Vec::new()
                }
            },
            RawContent::Unrecognized(_) => Vec::new(),
        }
    }
}

impl DictionarySource for StructuredDictionary {
    fn name(&self) -> &str {
        &self.name
    }

    fn find(&self, key: &str) -> Vec<&RawEntry> {
        self.index.find(key)
    }

    fn parse(&self, entry: &RawEntry) -> DictionaryEntry {
        DictionaryEntry::new(
            entry.word.clone(),
            entry.reading.clone(),
            entry.kind.clone(),
            self.meanings(entry),
        )
    }

    fn entry_count(&self) -> usize {
        self.index.len()
    }
}

/// Edition already stored in the canonical shape: word, reading, type and meanings
pub struct IdentityDictionary {
    name: String,
    index: TermIndex,
}

impl IdentityDictionary {
    pub fn new(name: impl Into<String>, index: TermIndex) -> Self {
        Self {
            name: name.into(),
            index,
        }
    }
}

impl DictionarySource for IdentityDictionary {
    fn name(&self) -> &str {
        &self.name
    }

    fn find(&self, key: &str) -> Vec<&RawEntry> {
        self.index.find(key)
    }

    fn parse(&self, entry: &RawEntry) -> DictionaryEntry {
        let RawEntry {
            word,
            reading,
            kind,
            content,
            ..
        } = entry;
        DictionaryEntry::new(word.clone(), reading.clone(), kind.clone(), flat_meanings(content))
    }

    fn entry_count(&self) -> usize {
        self.index.len()
    }
}

fn flat_meanings(content: &RawContent) -> Vec<String> {
    match content {
        RawContent::Flat(meanings) => meanings.clone(),
        _ => Vec::new(),
    }
}

/// Source for a configured edition over already-loaded records
pub fn open_edition(config: &EditionConfig, entries: Vec<RawEntry>) -> Box<dyn DictionarySource> {
    let index = TermIndex::build(entries, config.index_readings);
    let name = config.name.clone();

    match config.content {
        ContentShape::Flat => Box::new(FlatDictionary::new(name, index)),
        ContentShape::Structured => Box::new(StructuredDictionary::new(name, index)),
        ContentShape::Identity => Box::new(IdentityDictionary::new(name, index)),
    }
}
