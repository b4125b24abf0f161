use async_trait::async_trait;
use blackdict_types::{Entry, Language};
use reqwest::Url;

use crate::{DictionarySource, SourceError, SourceMetadata};

/// Free Dictionary API client (`{base_url}/{language}/{word}`)
#[derive(Clone)]
pub struct HttpDictionarySource {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpDictionarySource {
    pub fn new(base_url: &str, user_agent: &str) -> Result<Self, SourceError> {
        let base_url =
            Url::parse(base_url).map_err(|e| SourceError::InvalidUrl(format!("{base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(SourceError::InvalidUrl(base_url.to_string()));
        }

        let client = reqwest::Client::builder().user_agent(user_agent).build()?;

        Ok(Self { client, base_url })
    }

    /// Word is appended as a single percent-encoded path segment, as given
    pub fn entry_url(&self, language: Language, word: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(language.code()).push(word);
        }
        url
    }
}

#[async_trait]
impl DictionarySource for HttpDictionarySource {
    async fn fetch_entries(
        &self,
        language: Language,
        word: &str,
    ) -> Result<Vec<Entry>, SourceError> {
        let url = self.entry_url(language, word);
        tracing::debug!("GET {url}");

        let response = self.client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            tracing::debug!("Lookup {language}/{word} answered HTTP {status}");
            return Err(SourceError::NotFound {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        serde_json::from_slice::<Vec<Entry>>(&body)
            .map_err(|e| SourceError::Malformed(format!("Failed to parse response: {e}")))
    }

    fn metadata(&self) -> SourceMetadata {
        SourceMetadata {
            name: "Free Dictionary API".to_string(),
            base_url: self.base_url.to_string(),
        }
    }
}
