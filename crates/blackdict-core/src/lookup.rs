use std::sync::Arc;

use blackdict_source::DictionarySource;
use blackdict_types::{Entry, Language, LookupRequest};

use crate::LookupError;
use crate::preprocess::{fallback_note, prepare};

/// A resolved entry and the language it was actually found in
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub entry: Entry,
    pub language: Language,
}

impl Resolution {
    pub fn used_fallback(&self) -> bool {
        self.entry.note.is_some()
    }
}

/// Looks a word up in the requested language, retrying once in the
/// fallback language when the requested one has no entry.
#[derive(Clone)]
pub struct Resolver {
    source: Arc<dyn DictionarySource>,
    fallback: Language,
}

impl Resolver {
    pub fn new(source: Arc<dyn DictionarySource>) -> Self {
        Self {
            source,
            fallback: Language::DEFAULT,
        }
    }

    pub async fn resolve(&self, word: &str, language: Language) -> Result<Resolution, LookupError> {
        let request = prepare(word, language)?;
        self.resolve_request(&request).await
    }

    /// At most two sequential source calls: requested, then fallback
    pub async fn resolve_request(
        &self,
        request: &LookupRequest,
    ) -> Result<Resolution, LookupError> {
        let LookupRequest { word, language } = request;

        if let Some(entry) = self.first_entry(*language, word).await? {
            return Ok(Resolution {
                entry,
                language: *language,
            });
        }

        if *language == self.fallback {
            tracing::info!("No entry for '{word}' in {language}");
            return Err(LookupError::NotFound { word: word.clone() });
        }

        tracing::info!(
            "No entry for '{word}' in {language}, falling back to {}",
            self.fallback
        );

        match self.first_entry(self.fallback, word).await? {
            Some(mut entry) => {
                entry.note = Some(fallback_note(self.fallback, word));
                Ok(Resolution {
                    entry,
                    language: self.fallback,
                })
            }
            None => {
                tracing::info!("No entry for '{word}' in fallback {}", self.fallback);
                Err(LookupError::NotFound { word: word.clone() })
            }
        }
    }

    /// `Ok(None)` for "not found", `Err` for everything that is not an answer
    async fn first_entry(
        &self,
        language: Language,
        word: &str,
    ) -> Result<Option<Entry>, LookupError> {
        match self.source.fetch_entries(language, word).await {
            Ok(entries) => {
                tracing::debug!("{} entries for '{word}' in {language}", entries.len());
                Ok(entries.into_iter().next())
            }
            Err(e) if e.is_not_found() => {
                tracing::debug!("'{word}' not found in {language}: {e}");
                Ok(None)
            }
            Err(e) => {
                tracing::warn!("Lookup of '{word}' in {language} failed: {e}");
                Err(LookupError::Transport(e))
            }
        }
    }
}
