use crate::tmdb::models::MoviesResponse;
use async_trait::async_trait;
use reqwest::{Client, Error as ReqwestError, StatusCode};
use thiserror::Error;
use tracing::{debug, error, info, warn};

pub const DEFAULT_API_BASE_URL: &str = "https://api.themoviedb.org/3";

#[derive(Error, Debug)]
pub enum TmdbError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] ReqwestError),
    #[error("Unauthorized (missing or invalid TMDB token)")]
    Unauthorized,
    #[error("API rate limit exceeded")]
    RateLimit,
    #[error("Resource not found")]
    NotFound,
    #[error("Unexpected response status: {0}")]
    Status(StatusCode),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Anything that can answer a movie search, one page at a time.
///
/// The UI only talks to this trait so tests can drive it without a network.
#[async_trait]
pub trait MovieSource: Send + Sync {
    async fn search_movies(&self, query: &str, page: u32) -> Result<MoviesResponse, TmdbError>;
}

#[derive(Clone)]
pub struct TmdbClient {
    client: Client,
    token: String,
    base_url: String,
}

impl TmdbClient {
    pub fn new(token: Option<String>) -> Self {
        Self::with_base_url(token, DEFAULT_API_BASE_URL.to_string())
    }

    pub fn with_base_url(token: Option<String>, base_url: String) -> Self {
        Self {
            client: Client::new(),
            token: token.unwrap_or_default(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Search movies by free text, 1-based page
    pub async fn search_movies(
        &self,
        query: &str,
        page: u32,
    ) -> Result<MoviesResponse, TmdbError> {
        if query.trim().is_empty() {
            return Err(TmdbError::InvalidInput(
                "Search query must not be empty".to_string(),
            ));
        }
        if page == 0 {
            return Err(TmdbError::InvalidInput(
                "Page number must be greater than 0".to_string(),
            ));
        }

        let url = format!("{}/search/movie", self.base_url);
        let page_param = page.to_string();
        let params = [
            ("query", query),
            ("include_adult", "false"),
            ("language", "en-US"),
            ("page", page_param.as_str()),
        ];

        info!("📡 TMDB API: GET {} with query='{}', page={}", url, query, page);

        let response = self
            .client
            .get(&url)
            .query(&params)
            .bearer_auth(&self.token)
            .send()
            .await?;

        let status = response.status();
        debug!("Response status: {}", status);

        if status.is_success() {
            // Get the raw response text first for debugging on error
            let response_text = response.text().await?;

            let movies: MoviesResponse = serde_json::from_str(&response_text).map_err(|e| {
                error!("JSON parsing error for query '{}': {}", query, e);
                error!("Raw response: {}", response_text);
                e
            })?;

            info!(
                "✓ TMDB search returned {} result(s) on page {}/{}",
                movies.results.len(),
                movies.page,
                movies.total_pages
            );
            Ok(movies)
        } else if status == StatusCode::UNAUTHORIZED {
            warn!("✗ TMDB rejected the access token");
            Err(TmdbError::Unauthorized)
        } else if status == StatusCode::TOO_MANY_REQUESTS {
            warn!("✗ TMDB rate limit exceeded");
            Err(TmdbError::RateLimit)
        } else if status == StatusCode::NOT_FOUND {
            warn!("✗ TMDB endpoint not found: {}", url);
            Err(TmdbError::NotFound)
        } else {
            warn!("✗ TMDB API error: {}", status);
            Err(TmdbError::Status(status))
        }
    }
}

#[async_trait]
impl MovieSource for TmdbClient {
    async fn search_movies(&self, query: &str, page: u32) -> Result<MoviesResponse, TmdbError> {
        TmdbClient::search_movies(self, query, page).await
    }
}
