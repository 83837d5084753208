use crate::error::TokenizeError;
use crate::types::Token;

/// Segmentation model adapter for an un-spaced language.
///
/// The model is built once, asynchronously, and is read-only afterwards.
/// `tokenize` is only meaningful once `is_ready` reports true; callers are
/// expected to check readiness first.
pub trait MorphologicalTokenizer: Send + Sync {
    /// Language identifier (ISO 639-1 code: "ja", "zh", "ko", etc.)
    fn language_code(&self) -> &str;

    /// Whether the segmentation model has finished loading
    fn is_ready(&self) -> bool;

    /// Split a sentence into morphemes, in input order
    fn tokenize(&self, sentence: &str) -> Result<Vec<Token>, TokenizeError>;
}
