use blackdict_types::Language;
use serde::{Deserialize, Serialize};

use crate::env_parse;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupConfig {
    /// Language selected at startup. The fallback is always English.
    pub initial_language: Language,
    /// Drop results of searches superseded by a newer one.
    /// Off means the most recently settled response wins.
    pub discard_stale_results: bool,
}

impl LookupConfig {
    pub fn new() -> Self {
        Self {
            initial_language: env_parse("DICT_LANGUAGE").unwrap_or_default(),
            discard_stale_results: env_parse("DICT_DISCARD_STALE").unwrap_or(false),
        }
    }
}
