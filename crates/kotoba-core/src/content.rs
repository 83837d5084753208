//! Raw term-bank records and the structured-content markup tree they carry.
//!
//! Dictionary editions are maintained outside this project and their markup
//! evolves independently, so every shape here has a catch-all variant:
//! deserialization of a record never fails because of unexpected markup.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// One term-bank record: `[word, reading, type, extra, id, content, entryId, notes]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawTuple", into = "RawTuple")]
pub struct RawEntry {
    pub word: String,
    pub reading: String,
    pub kind: String,
    pub extra: String,
    pub id: Number,
    pub content: RawContent,
    pub entry_id: Number,
    pub notes: String,
}

type RawTuple = (
    String,
    Option<String>,
    Option<String>,
    Option<String>,
    Number,
    RawContent,
    Number,
    Option<String>,
);

impl From<RawTuple> for RawEntry {
    fn from(
        (word, reading, kind, extra, id, content, entry_id, notes): RawTuple,
    ) -> Self {
        Self {
            word,
            reading: reading.unwrap_or_default(),
            kind: kind.unwrap_or_default(),
            extra: extra.unwrap_or_default(),
            id,
            content,
            entry_id,
            notes: notes.unwrap_or_default(),
        }
    }
}

impl From<RawEntry> for RawTuple {
    fn from(entry: RawEntry) -> Self {
        (
            entry.word,
            Some(entry.reading),
            Some(entry.kind),
            Some(entry.extra),
            entry.id,
            entry.content,
            entry.entry_id,
            Some(entry.notes),
        )
    }
}

impl RawEntry {
    pub fn new(word: impl Into<String>, reading: impl Into<String>, content: RawContent) -> Self {
        Self {
            word: word.into(),
            reading: reading.into(),
            kind: String::new(),
            extra: String::new(),
            id: Number::from(0),
            content,
            entry_id: Number::from(0),
            notes: String::new(),
        }
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }
}

/// Slot 5 of a record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawContent {
    /// Plain meaning strings (also used by `forms` records)
    Flat(Vec<String>),
    /// Rich markup blocks
    Structured(Vec<GlossaryBlock>),
    /// Content stored as a JSON-encoded string by some exporters
    Encoded(String),
    Unrecognized(Value),
}

impl RawContent {
    pub fn flat<I, S>(meanings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Flat(meanings.into_iter().map(Into::into).collect())
    }
}

/// One element of a structured glossary array
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GlossaryBlock {
    Structured(StructuredContent),
    Text(String),
    Other(Value),
}

pub const STRUCTURED_CONTENT: &str = "structured-content";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuredContent {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    pub content: ContentTree,
}

impl StructuredContent {
    pub fn new(content: ContentTree) -> Self {
        Self {
            kind: Some(STRUCTURED_CONTENT.to_string()),
            content,
        }
    }

    /// Blocks without a `type` are accepted; blocks typed otherwise are not markup we know
    pub fn is_structured(&self) -> bool {
        self.kind.as_deref().is_none_or(|kind| kind == STRUCTURED_CONTENT)
    }
}

/// `content` of a block or node: a string, a node, or a list of either
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContentTree {
    Text(String),
    Node(Box<TagNode>),
    List(Vec<ContentTree>),
    Other(Value),
}

impl ContentTree {
    /// Children of this content, with a scalar treated as a one-element list
    pub fn items(&self) -> &[ContentTree] {
        match self {
            ContentTree::List(items) => items,
            other => std::slice::from_ref(other),
        }
    }

    pub fn as_node(&self) -> Option<&TagNode> {
        match self {
            ContentTree::Node(node) => Some(node),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ContentTree::Text(text) => Some(text),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagNode {
    pub tag: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<ContentTree>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub data: BTreeMap<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
}

impl TagNode {
    pub fn new(tag: impl Into<String>, content: ContentTree) -> Self {
        Self {
            tag: tag.into(),
            content: Some(content),
            data: BTreeMap::new(),
            lang: None,
        }
    }

    pub fn with_data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), Value::String(value.into()));
        self
    }

    /// `data.content` as a string, e.g. `"glossary"` or `"forms"`
    pub fn data_content(&self) -> Option<&str> {
        self.data.get("content").and_then(Value::as_str)
    }
}
