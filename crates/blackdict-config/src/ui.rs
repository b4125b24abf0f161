use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::env_parse;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Html,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "html" => Ok(OutputFormat::Html),
            _ => Err(format!(
                "Invalid output format: '{}'. Valid options: text, html",
                s
            )),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Html => write!(f, "html"),
        }
    }
}

fn default_prompt() -> bool {
    true
}

fn default_commands() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub output: OutputFormat,
    /// Print a prompt before reading each line
    #[serde(default = "default_prompt")]
    pub prompt: bool,
    /// Treat `:`-prefixed lines as commands rather than words
    #[serde(default = "default_commands")]
    pub commands: bool,
}

impl UiConfig {
    pub fn new() -> Self {
        Self {
            output: env_parse("DICT_OUTPUT").unwrap_or_default(),
            prompt: default_prompt(),
            commands: default_commands(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            output: OutputFormat::default(),
            prompt: default_prompt(),
            commands: default_commands(),
        }
    }
}
