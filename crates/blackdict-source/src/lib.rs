use blackdict_types::{Entry, Language};

mod http;

pub use http::HttpDictionarySource;

/// Dictionary data source keyed by `(language, word)`
#[async_trait::async_trait]
pub trait DictionarySource: Send + Sync {
    /// Fetch every entry the source has for `word` in `language`.
    ///
    /// A source that has nothing for the word returns [`SourceError::NotFound`]
    /// or an empty list; both count as "not found" to callers.
    async fn fetch_entries(&self, language: Language, word: &str)
    -> Result<Vec<Entry>, SourceError>;

    /// Provider metadata
    fn metadata(&self) -> SourceMetadata;
}

#[derive(Debug, Clone)]
pub struct SourceMetadata {
    pub name: String,
    pub base_url: String,
}

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The API answered, but not with an entry list
    #[error("No entry (HTTP {status})")]
    NotFound { status: u16 },

    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Malformed response: {0}")]
    Malformed(String),

    #[error("Invalid base URL: {0}")]
    InvalidUrl(String),
}

impl SourceError {
    /// Whether the failure means "the word is not there" rather than
    /// "the source could not be asked"
    pub fn is_not_found(&self) -> bool {
        matches!(self, SourceError::NotFound { .. })
    }
}
