use std::sync::Arc;

use kotoba_config::dictionary::DictionaryConfig;
use kotoba_config::tokenizer::TokenizerConfig;
use kotoba_core::dictionary::DictionaryAggregator;
use kotoba_core::error::LookupError;
use kotoba_core::language::MorphologicalTokenizer;
use kotoba_core::lookup::{LookupCase, LookupResponse};
use tokio::task::JoinHandle;

use crate::dictionary::open_edition;
use crate::loader::TermBankLoader;
use crate::tokenizer::VibratoTokenizer;

/// Japanese lookup service: one tokenizer and one set of dictionaries,
/// constructed at startup and shared by reference across requests
pub struct JapaneseProcessor {
    tokenizer: Arc<VibratoTokenizer>,
    dictionary: DictionaryAggregator,
}

impl JapaneseProcessor {
    pub fn new(tokenizer: Arc<VibratoTokenizer>, dictionary: DictionaryAggregator) -> Self {
        Self {
            tokenizer,
            dictionary,
        }
    }

    /// Load configured dictionaries; the tokenizer starts not ready
    pub fn from_config(config: &DictionaryConfig) -> Self {
        Self::new(
            Arc::new(VibratoTokenizer::new()),
            Self::load_dictionaries(config),
        )
    }

    /// Every enabled edition, in configured order. Editions that fail to load are skipped.
    pub fn load_dictionaries(config: &DictionaryConfig) -> DictionaryAggregator {
        let mut aggregator = DictionaryAggregator::default();

        for edition in config.enabled_editions() {
            match TermBankLoader::load_bundle(&config.base_path, &edition.file) {
                Ok(entries) => {
                    let source = open_edition(edition, entries);
                    tracing::info!(
                        "Dictionary '{}' ready with {} entries",
                        source.name(),
                        source.entry_count()
                    );
                    aggregator.push(source);
                }
                Err(e) => {
                    tracing::warn!("Failed to load dictionary '{}': {}", edition.name, e);
                }
            }
        }

        if aggregator.is_empty() {
            tracing::warn!("No dictionaries loaded, lookups will return no entries");
        }
        aggregator
    }

    /// Begin building the tokenizer model in the background
    pub fn start_tokenizer(&self, config: TokenizerConfig) -> JoinHandle<()> {
        self.tokenizer.initialize(config)
    }

    pub fn is_ready(&self) -> bool {
        self.tokenizer.is_ready()
    }

    pub fn dictionary(&self) -> &DictionaryAggregator {
        &self.dictionary
    }

    pub fn lookup(&self, sentence: &str) -> Result<LookupResponse, LookupError> {
        LookupCase::new(self.tokenizer.as_ref(), &self.dictionary).lookup(sentence)
    }
}
