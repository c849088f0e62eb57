pub mod checker;
pub mod cli;
pub mod config;
pub mod debounce;
pub mod error;

use serde::Serialize;

pub use checker::tokenizer::{tokenize, Span, Tokens};
pub use checker::wordset::WordSet;
pub use checker::SpellChecker;
pub use config::Config;
pub use debounce::Debouncer;
pub use error::DictionaryError;

/// A word the checker found in none of its vocabularies.
///
/// `start`/`end` are half-open byte offsets into the checked text and
/// `word` is the token exactly as written there. Entries are ordered by
/// ascending `start`; the GUI collaborator uses the offsets for underline
/// placement and the word for suggestion lookups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MisspelledEntry {
    pub start: usize,
    pub end: usize,
    pub word: String,
}
