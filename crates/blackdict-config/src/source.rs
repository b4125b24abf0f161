use std::env;

use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries";

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_user_agent() -> String {
    concat!("blackdict/", env!("CARGO_PKG_VERSION")).to_string()
}

/// Dictionary web API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Entries endpoint, the lookup appends `/{language}/{word}`
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl SourceConfig {
    pub fn new() -> Self {
        let base_url = env::var("DICT_API_URL").unwrap_or_else(|_| default_base_url());
        let user_agent = env::var("DICT_USER_AGENT").unwrap_or_else(|_| default_user_agent());

        Self {
            base_url,
            user_agent,
        }
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
        }
    }
}
