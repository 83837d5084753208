//! Sentence lookup: tokenize, derive search variants, query every dictionary.

use serde::Serialize;

use crate::dictionary::DictionaryAggregator;
use crate::error::LookupError;
use crate::language::MorphologicalTokenizer;
use crate::types::{DictionaryEntry, SearchVariant, Token};

pub const STATUS_OK: u16 = 200;
pub const STATUS_BAD_REQUEST: u16 = 400;

/// Search keys for a tokenized sentence.
///
/// All surface forms, then all basic forms, then the first character of every
/// basic form. Always `3 * tokens.len()` slots; duplicates are kept.
pub fn generate_variants(tokens: &[Token]) -> Vec<SearchVariant> {
    let surface_forms = tokens.iter().map(|t| SearchVariant::new(t.surface_form.as_str()));
    let basic_forms = tokens.iter().map(|t| SearchVariant::new(t.basic_form.as_str()));
    let first_chars = tokens.iter().map(|t| match t.basic_form.chars().next() {
        Some(c) => SearchVariant::new(c.to_string()),
        None => SearchVariant::absent(),
    });

    surface_forms.chain(basic_forms).chain(first_chars).collect()
}

/// Why a request was turned away before any work was done
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    EmptySentence,
    TokenizerNotReady,
}

impl Rejection {
    pub fn message(&self) -> &'static str {
        match self {
            Rejection::EmptySentence => "The sentence is not specified",
            Rejection::TokenizerNotReady => "The tokenizer is not ready",
        }
    }
}

/// Outcome of a lookup, shaped for the transport layer
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LookupResponse {
    Rejected {
        status: u16,
        error: String,
    },
    Completed {
        status: u16,
        #[serde(rename = "dictionaryResult")]
        dictionary_result: Vec<DictionaryEntry>,
        /// Basic form of every token, in token order
        words: Vec<String>,
        tokens: Vec<Token>,
    },
}

impl LookupResponse {
    pub fn rejected(reason: Rejection) -> Self {
        LookupResponse::Rejected {
            status: STATUS_BAD_REQUEST,
            error: reason.message().to_string(),
        }
    }

    pub fn status(&self) -> u16 {
        match self {
            LookupResponse::Rejected { status, .. } | LookupResponse::Completed { status, .. } => {
                *status
            }
        }
    }
}

/// Drives tokenizer -> variant generation -> aggregator for one sentence
pub struct LookupCase<'a> {
    tokenizer: &'a dyn MorphologicalTokenizer,
    dictionary: &'a DictionaryAggregator,
}

impl<'a> LookupCase<'a> {
    pub fn new(
        tokenizer: &'a dyn MorphologicalTokenizer,
        dictionary: &'a DictionaryAggregator,
    ) -> Self {
        Self {
            tokenizer,
            dictionary,
        }
    }

    /// Rejections come back as a 400 response; only tokenizer failures are `Err`
    pub fn lookup(&self, sentence: &str) -> Result<LookupResponse, LookupError> {
        if sentence.is_empty() {
            return Ok(LookupResponse::rejected(Rejection::EmptySentence));
        }
        if !self.tokenizer.is_ready() {
            tracing::warn!("Lookup requested before tokenizer is ready");
            return Ok(LookupResponse::rejected(Rejection::TokenizerNotReady));
        }

        let tokens = self.tokenizer.tokenize(sentence)?;
        let variants = generate_variants(&tokens);
        let dictionary_result = self.dictionary.find(&variants);
        let words = tokens.iter().map(|t| t.basic_form.clone()).collect();

        tracing::debug!(
            "Looked up '{}': {} tokens, {} variants, {} entries",
            sentence,
            tokens.len(),
            variants.len(),
            dictionary_result.len()
        );

        Ok(LookupResponse::Completed {
            status: STATUS_OK,
            dictionary_result,
            words,
            tokens,
        })
    }
}
