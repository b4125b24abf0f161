use std::env;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use self::logging::LoggingConfig;
use self::lookup::LookupConfig;
use self::source::SourceConfig;
use self::ui::UiConfig;

pub mod logging;
pub mod lookup;
pub mod source;
pub mod ui;

pub use self::logging::LogFormat;
pub use self::ui::OutputFormat;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub source: SourceConfig,
    pub lookup: LookupConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Defaults with environment overrides applied
    pub fn new() -> Self {
        Config {
            source: SourceConfig::new(),
            lookup: LookupConfig::new(),
            ui: UiConfig::new(),
            logging: LoggingConfig::new(),
        }
    }

    /// Load a JSON profile; sections missing from the file keep their defaults
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        tracing::info!("Loading config from {}", path.display());
        let data = fs::read_to_string(path)?;
        let config = serde_json::from_str(&data)?;
        Ok(config)
    }
}

/// Parsed env var, `None` when unset or unparsable
pub(crate) fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    let value = env::var(key).ok()?;
    match value.parse() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            tracing::warn!("Ignoring invalid value for {key}: '{value}'");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use blackdict_types::Language;

    use super::*;

    #[test]
    fn partial_profile_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "lookup": {{ "initial_language": "fr", "discard_stale_results": true }} }}"#
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.lookup.initial_language, Language::French);
        assert!(config.lookup.discard_stale_results);
        assert_eq!(config.source.base_url, source::DEFAULT_BASE_URL);
        assert_eq!(config.ui.output, OutputFormat::Text);
    }

    #[test]
    fn bad_profile_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "lookup": {{ "initial_language": "xx" }} }}"#).unwrap();

        assert!(matches!(
            Config::load(file.path()),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn missing_profile_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            Config::load(&dir.path().join("nope.json")),
            Err(ConfigError::Read(_))
        ));
    }
}
