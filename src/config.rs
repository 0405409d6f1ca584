use crate::query::CachePolicy;
use crate::tmdb::client::DEFAULT_API_BASE_URL;
use crate::tmdb::ImageUrls;
use std::collections::HashMap;
use std::time::Duration;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value:?}")]
    InvalidValue { name: &'static str, value: String },
}

/// Application configuration
/// In debug builds: loads a .env file first, then reads the environment
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// TMDB v4 read access token, sent as a bearer token
    pub tmdb_token: Option<String>,
    pub api_base_url: String,
    pub images: ImageUrls,
    pub cache: CachePolicy,
    /// How long a notification stays on screen
    pub toast_duration: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tmdb_token: None,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            images: ImageUrls::default(),
            cache: CachePolicy::default(),
            toast_duration: Duration::from_millis(4000),
        }
    }
}

impl Config {
    /// Load configuration based on build mode
    pub fn load() -> Self {
        #[cfg(debug_assertions)]
        {
            if dotenvy::dotenv().is_ok() {
                info!("Config: Dev mode activated - loaded .env file");
            } else {
                info!("Config: No .env file found, reading process environment");
            }
        }

        let vars: HashMap<String, String> = std::env::vars().collect();
        let config = Self::from_vars(&vars).unwrap_or_else(|errors| {
            for error in &errors {
                warn!("Config: {}, using default", error);
            }
            Self::from_vars_lenient(&vars)
        });

        if config.tmdb_token.is_none() {
            warn!("Config: TMDB_TOKEN is not set, searches will be rejected as unauthorized");
        }
        config
    }

    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self, Vec<ConfigError>> {
        let vars: HashMap<String, String> = std::env::vars().collect();
        Self::from_vars(&vars)
    }

    /// Build configuration from a variable map, reporting every invalid value
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, Vec<ConfigError>> {
        let mut errors = Vec::new();
        let config = Self::build(vars, &mut errors);
        if errors.is_empty() {
            Ok(config)
        } else {
            Err(errors)
        }
    }

    fn from_vars_lenient(vars: &HashMap<String, String>) -> Self {
        Self::build(vars, &mut Vec::new())
    }

    fn build(vars: &HashMap<String, String>, errors: &mut Vec<ConfigError>) -> Self {
        let defaults = Self::default();
        let text = |name: &str| {
            vars.get(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let mut number = |name: &'static str, default: u64| match text(name) {
            None => default,
            Some(value) => value.parse::<u64>().unwrap_or_else(|_| {
                errors.push(ConfigError::InvalidValue { name, value });
                default
            }),
        };

        let stale_secs = number("MARQUEE_STALE_SECS", defaults.cache.stale_time.as_secs());
        let cache_secs = number("MARQUEE_CACHE_SECS", defaults.cache.cache_time.as_secs());
        let toast_millis = number(
            "MARQUEE_TOAST_MILLIS",
            defaults.toast_duration.as_millis() as u64,
        );

        Self {
            tmdb_token: text("TMDB_TOKEN"),
            api_base_url: text("MARQUEE_API_BASE").unwrap_or(defaults.api_base_url),
            images: ImageUrls {
                base_url: text("MARQUEE_IMAGE_BASE").unwrap_or(defaults.images.base_url),
                placeholder_url: text("MARQUEE_PLACEHOLDER_IMAGE")
                    .unwrap_or(defaults.images.placeholder_url),
            },
            cache: CachePolicy {
                stale_time: Duration::from_secs(stale_secs),
                cache_time: Duration::from_secs(cache_secs),
            },
            toast_duration: Duration::from_millis(toast_millis),
        }
    }
}

/// Hook to access the configuration from components
pub fn use_config() -> Config {
    use dioxus::prelude::use_context;
    let app_context = use_context::<crate::AppContext>();
    app_context.config
}
