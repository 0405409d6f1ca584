use crate::config;
use crate::tmdb::{MovieSource, TmdbClient};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppContext {
    pub config: config::Config,
    pub source: Arc<dyn MovieSource>,
}

impl AppContext {
    /// Context backed by the real TMDB client
    pub fn new(config: config::Config) -> Self {
        let client = TmdbClient::with_base_url(
            config.tmdb_token.clone(),
            config.api_base_url.clone(),
        );
        Self::with_source(config, Arc::new(client))
    }

    pub fn with_source(config: config::Config, source: Arc<dyn MovieSource>) -> Self {
        Self { config, source }
    }
}
