use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};

use kotoba_config::tokenizer::TokenizerConfig;
use kotoba_core::error::TokenizeError;
use kotoba_core::language::MorphologicalTokenizer;
use kotoba_core::types::Token;
use tokio::task::JoinHandle;
use vibrato::{Dictionary, Tokenizer};

/// Feature columns of the MeCab/IPADIC format
const IDX_POS: usize = 0;
const IDX_POS_DETAIL: std::ops::Range<usize> = 1..4;
const IDX_CONJUGATED_TYPE: usize = 4;
const IDX_CONJUGATED_FORM: usize = 5;
const IDX_BASIC_FORM: usize = 6;
const IDX_READING: usize = 7;
const IDX_PRONUNCIATION: usize = 8;

#[derive(Debug, thiserror::Error)]
pub enum TokenizerError {
    #[error("Tokenizer dictionary not found: {0}")]
    DictionaryNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid tokenizer dictionary: {0}")]
    Vibrato(#[from] vibrato::errors::VibratoError),

    #[error("Tokenizer is already initialized")]
    AlreadyInitialized,
}

/// Process-wide Japanese segmenter backed by vibrato.
///
/// Starts empty; the model is built once (usually on a blocking thread at
/// startup) and never replaced. Until then `is_ready` is false and no partial
/// model is ever visible.
#[derive(Default)]
pub struct VibratoTokenizer {
    model: OnceLock<Tokenizer>,
    initializing: AtomicBool,
}

impl VibratoTokenizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Already-ready tokenizer around a built model
    pub fn from_model(model: Tokenizer) -> Self {
        let tokenizer = Self::new();
        tokenizer.initializing.store(true, Ordering::Release);
        let _ = tokenizer.model.set(model);
        tokenizer
    }

    /// Build the model on a blocking thread.
    ///
    /// Failure is logged and leaves the tokenizer not ready; nothing retries.
    pub fn initialize(self: &Arc<Self>, config: TokenizerConfig) -> JoinHandle<()> {
        let tokenizer = Arc::clone(self);
        tokio::task::spawn_blocking(move || {
            let path = config.dictionary_path.display().to_string();
            tracing::info!("Building tokenizer from {}...", path);
            match tokenizer.load(&config) {
                Ok(()) => tracing::info!("Tokenizer ready"),
                Err(e) => tracing::error!("Tokenizer construction error ({}): {}", path, e),
            }
        })
    }

    /// Build the model on the current thread
    pub fn load(&self, config: &TokenizerConfig) -> Result<(), TokenizerError> {
        if self.initializing.swap(true, Ordering::AcqRel) {
            return Err(TokenizerError::AlreadyInitialized);
        }

        let result = build_model(config)
            .and_then(|model| self.model.set(model).map_err(|_| TokenizerError::AlreadyInitialized));

        if result.is_err() && self.model.get().is_none() {
            self.initializing.store(false, Ordering::Release);
        }
        result
    }
}

fn build_model(config: &TokenizerConfig) -> Result<Tokenizer, TokenizerError> {
    let dictionary = read_dictionary(&config.dictionary_path)?;
    let model = Tokenizer::new(dictionary)
        .ignore_space(config.ignore_space)?
        .max_grouping_len(config.max_grouping_len);
    Ok(model)
}

/// Read a compiled system dictionary, decompressing `.zst` bundles on the fly
fn read_dictionary(path: &Path) -> Result<Dictionary, TokenizerError> {
    if !path.exists() {
        return Err(TokenizerError::DictionaryNotFound(path.display().to_string()));
    }

    let file = File::open(path)?;
    let reader: Box<dyn Read> = if path.extension().is_some_and(|ext| ext == "zst") {
        Box::new(zstd::Decoder::new(file)?)
    } else {
        Box::new(BufReader::new(file))
    };

    Ok(Dictionary::read(reader)?)
}

impl MorphologicalTokenizer for VibratoTokenizer {
    fn language_code(&self) -> &str {
        "ja"
    }

    fn is_ready(&self) -> bool {
        self.model.get().is_some()
    }

    fn tokenize(&self, sentence: &str) -> Result<Vec<Token>, TokenizeError> {
        let model = self.model.get().ok_or(TokenizeError::NotReady)?;

        let mut worker = model.new_worker();
        worker.reset_sentence(sentence);
        worker.tokenize();

        let tokens = (0..worker.num_tokens())
            .map(|i| {
                let token = worker.token(i);
                decode_token(token.surface(), token.feature(), token.range_char().start)
            })
            .collect();

        Ok(tokens)
    }
}

/// Build a token from an IPADIC feature string.
///
/// `*` and missing columns count as absent; the basic form then falls back
/// to the surface form.
pub fn decode_token(surface: &str, feature: &str, char_start: usize) -> Token {
    let parts: Vec<&str> = feature.split(',').collect();

    let field = |idx: usize| -> Option<String> {
        parts
            .get(idx)
            .filter(|s| !s.is_empty() && **s != "*")
            .map(|s| (*s).to_string())
    };

    Token {
        surface_form: surface.to_string(),
        basic_form: field(IDX_BASIC_FORM).unwrap_or_else(|| surface.to_string()),
        reading: field(IDX_READING),
        pronunciation: field(IDX_PRONUNCIATION),
        part_of_speech: parts.get(IDX_POS).map(|s| (*s).to_string()).unwrap_or_default(),
        pos_detail: IDX_POS_DETAIL
            .filter_map(|idx| parts.get(idx).map(|s| (*s).to_string()))
            .collect(),
        conjugated_type: field(IDX_CONJUGATED_TYPE),
        conjugated_form: field(IDX_CONJUGATED_FORM),
        word_position: char_start + 1,
    }
}
