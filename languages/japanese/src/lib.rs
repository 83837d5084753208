pub mod dictionary;
pub mod loader;
pub mod processor;
pub mod structured;
pub mod tokenizer;

#[cfg(test)]
mod test_utils;
#[cfg(test)]
mod tests;

pub use dictionary::{FlatDictionary, IdentityDictionary, StructuredDictionary, TermIndex, open_edition};
pub use loader::TermBankLoader;
pub use processor::JapaneseProcessor;
pub use structured::extract_meanings;
pub use tokenizer::{TokenizerError, VibratoTokenizer};
