pub mod content;
pub mod dictionary;
pub mod error;
pub mod language;
pub mod lookup;
pub mod preprocess;
pub mod types;

pub use content::{ContentTree, GlossaryBlock, RawContent, RawEntry, StructuredContent, TagNode};
pub use dictionary::{DictionaryAggregator, DictionarySource, LoadError};
pub use error::{LookupError, TokenizeError};
pub use language::MorphologicalTokenizer;
pub use lookup::{LookupCase, LookupResponse, Rejection, generate_variants};
pub use types::{DictionaryEntry, SearchVariant, Token};
