#[derive(Debug, thiserror::Error)]
pub enum TokenizeError {
    #[error("Tokenizer is not ready")]
    NotReady,

    #[error("Tokenizer backend failed: {0}")]
    Backend(String),
}

/// Failures that abort a single lookup request.
///
/// Rejected input is not an error: it is reported as a 400 response.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("Tokenization failed: {0}")]
    Tokenize(#[from] TokenizeError),
}
