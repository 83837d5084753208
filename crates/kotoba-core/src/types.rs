use serde::{Deserialize, Serialize};

/// One morpheme of a tokenized sentence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Text as it appeared in the sentence
    pub surface_form: String,
    /// Citation form, equal to `surface_form` when the tokenizer could not lemmatize
    pub basic_form: String,
    pub reading: Option<String>,
    pub pronunciation: Option<String>,
    pub part_of_speech: String,
    #[serde(default)]
    pub pos_detail: Vec<String>,
    pub conjugated_type: Option<String>,
    pub conjugated_form: Option<String>,
    /// 1-based character offset in the sentence
    pub word_position: usize,
}

impl Token {
    /// Bare token with only surface and basic form set
    pub fn new(surface_form: impl Into<String>, basic_form: impl Into<String>) -> Self {
        Self {
            surface_form: surface_form.into(),
            basic_form: basic_form.into(),
            reading: None,
            pronunciation: None,
            part_of_speech: String::new(),
            pos_detail: Vec::new(),
            conjugated_type: None,
            conjugated_form: None,
            word_position: 0,
        }
    }
}

/// Edition-agnostic dictionary hit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryEntry {
    pub word: String,
    pub reading: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub meanings: Vec<String>,
    /// Name of the source that produced this entry, set by the aggregator
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dictionary: Option<String>,
}

impl DictionaryEntry {
    pub fn new(
        word: impl Into<String>,
        reading: impl Into<String>,
        kind: impl Into<String>,
        meanings: Vec<String>,
    ) -> Self {
        Self {
            word: word.into(),
            reading: reading.into(),
            kind: kind.into(),
            meanings,
            dictionary: None,
        }
    }
}

/// One search key probed against every dictionary source.
///
/// `None` marks a slot that exists but can never match, e.g. the first
/// character of an empty basic form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchVariant(Option<String>);

impl SearchVariant {
    pub fn new(key: impl Into<String>) -> Self {
        Self(Some(key.into()))
    }

    pub fn absent() -> Self {
        Self(None)
    }

    pub fn key(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl From<&str> for SearchVariant {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}
