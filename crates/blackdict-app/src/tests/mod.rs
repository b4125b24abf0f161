
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use blackdict_config::Config;
use blackdict_source::{DictionarySource, SourceError, SourceMetadata};
use blackdict_types::{Definition, Entry, Language, Meaning};

use crate::state::AppState;

/// Canned source; each word can answer after a delay
#[derive(Default)]
pub(crate) struct StubSource {
    entries: HashMap<(Language, String), (Entry, Duration)>,
    calls: AtomicUsize,
}

impl StubSource {
    pub(crate) fn with(self, language: Language, word: &str, definition: &str) -> Self {
        self.with_delay(language, word, definition, Duration::ZERO)
    }

    pub(crate) fn with_delay(
        mut self,
        language: Language,
        word: &str,
        definition: &str,
        delay: Duration,
    ) -> Self {
        let entry = Entry {
            word: word.to_string(),
            meanings: vec![Meaning {
                part_of_speech: "noun".into(),
                definitions: vec![Definition {
                    text: definition.to_string(),
                    example: None,
                }],
            }],
            ..Default::default()
        };
        self.entries.insert((language, word.to_string()), (entry, delay));
        self
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DictionarySource for StubSource {
    async fn fetch_entries(
        &self,
        language: Language,
        word: &str,
    ) -> Result<Vec<Entry>, SourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        match self.entries.get(&(language, word.to_string())) {
            Some((entry, delay)) => {
                tokio::time::sleep(*delay).await;
                Ok(vec![entry.clone()])
            }
            None => Err(SourceError::NotFound { status: 404 }),
        }
    }

    fn metadata(&self) -> SourceMetadata {
        SourceMetadata {
            name: "stub".into(),
            base_url: "memory://".into(),
        }
    }
}

pub(crate) fn state_with(source: Arc<StubSource>, config: Config) -> Arc<AppState> {
    Arc::new(AppState::with_source(config, source))
}
