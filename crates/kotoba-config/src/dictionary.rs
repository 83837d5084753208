use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

fn default_base_path() -> PathBuf {
    PathBuf::from("data/dict")
}

fn default_editions() -> Vec<EditionConfig> {
    vec![
        EditionConfig {
            name: "english".to_string(),
            file: "combined_terms_JMdict_english".to_string(),
            content: ContentShape::Structured,
            index_readings: true,
            enabled: true,
        },
        EditionConfig {
            name: "russian".to_string(),
            file: "combined_terms_JMdict_russian".to_string(),
            content: ContentShape::Identity,
            index_readings: false,
            enabled: true,
        },
    ]
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Directory holding the term bank bundles
    #[serde(default = "default_base_path")]
    pub base_path: PathBuf,
    /// Queried in this order
    #[serde(default = "default_editions")]
    pub editions: Vec<EditionConfig>,
}

impl DictionaryConfig {
    pub fn new() -> Self {
        let mut config = Self::default();
        config.apply_env();
        config
    }

    pub fn apply_env(&mut self) {
        if let Ok(path) = env::var("KOTOBA_DICT_PATH") {
            self.base_path = PathBuf::from(path);
        }
    }

    pub fn enabled_editions(&self) -> impl Iterator<Item = &EditionConfig> {
        self.editions.iter().filter(|e| e.enabled)
    }
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            base_path: default_base_path(),
            editions: default_editions(),
        }
    }
}

/// Raw record shape shipped by an edition
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ContentShape {
    /// Meanings are a plain string list
    Flat,
    /// Meanings are structured-content markup (`forms` records stay flat)
    Structured,
    /// Records already carry the canonical shape
    Identity,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct EditionConfig {
    pub name: String,
    /// Bundle root under `base_path`, without extension
    pub file: String,
    pub content: ContentShape,
    #[serde(default)]
    pub index_readings: bool,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}
