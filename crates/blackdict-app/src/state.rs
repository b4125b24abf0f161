use std::sync::Arc;

use blackdict_config::Config;
use blackdict_core::Resolver;
use blackdict_source::{DictionarySource, HttpDictionarySource};
use tokio::sync::RwLock;

pub struct AppState {
    pub config: Arc<RwLock<Config>>,
    pub resolver: Resolver,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let source =
            HttpDictionarySource::new(&config.source.base_url, &config.source.user_agent)?;
        let metadata = source.metadata();
        tracing::info!("Dictionary source: {} ({})", metadata.name, metadata.base_url);

        Ok(Self::with_source(config, Arc::new(source)))
    }

    pub fn with_source(config: Config, source: Arc<dyn DictionarySource>) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
            resolver: Resolver::new(source),
        }
    }
}
