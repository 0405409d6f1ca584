use async_trait::async_trait;
use marquee::tmdb::{MovieSource, MoviesResponse, TmdbError};
use std::collections::HashMap;
use std::sync::Mutex;

/// In-memory movie source keyed by (query, page)
#[derive(Default)]
pub struct MockMovieSource {
    responses: Mutex<HashMap<(String, u32), MoviesResponse>>,
    failing: Mutex<Vec<String>>,
    calls: Mutex<Vec<(String, u32)>>,
}

impl MockMovieSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(self, query: &str, page: u32, response: MoviesResponse) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert((query.to_string(), page), response);
        self
    }

    /// Every page of `query` fails with a server error
    pub fn failing(self, query: &str) -> Self {
        self.failing.lock().unwrap().push(query.to_string());
        self
    }

    pub fn calls(&self) -> Vec<(String, u32)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl MovieSource for MockMovieSource {
    async fn search_movies(&self, query: &str, page: u32) -> Result<MoviesResponse, TmdbError> {
        self.calls.lock().unwrap().push((query.to_string(), page));

        if self.failing.lock().unwrap().iter().any(|q| q == query) {
            return Err(TmdbError::Status(
                reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            ));
        }

        Ok(self
            .responses
            .lock()
            .unwrap()
            .get(&(query.to_string(), page))
            .cloned()
            .unwrap_or(MoviesResponse {
                results: Vec::new(),
                total_results: 0,
                page,
                total_pages: 0,
            }))
    }
}
