use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::log::LogConfig;
use self::tokenizer::TokenizerConfig;

pub mod dictionary;
pub mod log;
pub mod tokenizer;

#[derive(Debug, Default, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub dictionary: DictionaryConfig,
    pub tokenizer: TokenizerConfig,
    pub log: LogConfig,
}

impl Config {
    /// Defaults with environment overrides applied
    pub fn new() -> Self {
        Config {
            dictionary: DictionaryConfig::new(),
            tokenizer: TokenizerConfig::new(),
            log: LogConfig::new(),
        }
    }

    /// Environment variables win over values read from a config file
    pub fn with_env_overrides(mut self) -> Self {
        self.dictionary.apply_env();
        self.tokenizer.apply_env();
        self.log.apply_env();
        self
    }
}
