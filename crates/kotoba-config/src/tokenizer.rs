use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_dictionary_path() -> PathBuf {
    PathBuf::from("data/dict/ipadic/system.dic.zst")
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct TokenizerConfig {
    /// Compiled system dictionary, zstd-compressed when it ends in `.zst`
    #[serde(default = "default_dictionary_path")]
    pub dictionary_path: PathBuf,
    #[serde(default)]
    pub ignore_space: bool,
    /// Maximum length of grouped unknown words, 0 for no limit
    #[serde(default)]
    pub max_grouping_len: usize,
}

impl TokenizerConfig {
    pub fn new() -> Self {
        let mut config = Self::default();
        config.apply_env();
        config
    }

    pub fn apply_env(&mut self) {
        if let Ok(path) = env::var("KOTOBA_TOKENIZER_DIC") {
            self.dictionary_path = PathBuf::from(path);
        }
    }
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            dictionary_path: default_dictionary_path(),
            ignore_space: false,
            max_grouping_len: 0,
        }
    }
}
