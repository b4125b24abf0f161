use blackdict_types::{Language, LookupRequest};

use crate::LookupError;

/// Turn raw input into a request. The word is trimmed and otherwise left
/// untouched: no case folding, no Unicode normalization.
pub fn prepare(word: &str, language: Language) -> Result<LookupRequest, LookupError> {
    LookupRequest::new(word, language).ok_or(LookupError::EmptyInput)
}

/// Note attached to an entry that came from the fallback language
pub fn fallback_note(fallback: Language, word: &str) -> String {
    format!("Note: This is the {} definition for \"{}\".", fallback.name(), word)
}
