use serde::{Deserialize, Serialize};

use crate::Language;

/// One user-initiated search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    pub word: String,
    pub language: Language,
}

impl LookupRequest {
    /// Builds a request from raw input, `None` when the word is blank
    pub fn new(word: &str, language: Language) -> Option<Self> {
        let word = word.trim();
        if word.is_empty() {
            return None;
        }

        Some(Self {
            word: word.to_string(),
            language,
        })
    }
}

/// Dictionary record for one word in one language.
///
/// Field names follow the dictionaryapi.dev wire format so the entry can be
/// deserialized straight from a response body.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub word: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phonetic: Option<String>,
    /// Set only by the resolver when the fallback language was used
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default)]
    pub meanings: Vec<Meaning>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translations: Option<Vec<Translation>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phonetics: Option<Vec<PhoneticAudio>>,
}

impl Entry {
    /// First audio URL in original order that can actually be played
    pub fn first_audio_url(&self) -> Option<&str> {
        self.phonetics
            .as_deref()?
            .iter()
            .find_map(PhoneticAudio::playable_url)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meaning {
    pub part_of_speech: String,
    #[serde(default)]
    pub definitions: Vec<Definition>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Definition {
    #[serde(rename = "definition")]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Translation {
    pub text: String,
    pub lang: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PhoneticAudio {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(rename = "audio", default, skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
}

impl PhoneticAudio {
    /// The API sends `""` for entries without a recording
    pub fn playable_url(&self) -> Option<&str> {
        self.audio_url.as_deref().filter(|url| !url.trim().is_empty())
    }
}
