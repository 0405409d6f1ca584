use crate::tmdb::Movie;
use tracing::debug;

/// Identifies one logical search request: (query, 1-based page)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FetchKey {
    pub query: String,
    pub page: u32,
}

impl FetchKey {
    pub fn new(query: impl Into<String>, page: u32) -> Self {
        Self {
            query: query.into(),
            page,
        }
    }
}

/// UI session state owned by the search controller
#[derive(Debug, Clone, PartialEq)]
pub struct SearchSession {
    query: String,
    page: u32,
    selected: Option<Movie>,
}

impl Default for SearchSession {
    fn default() -> Self {
        Self {
            query: String::new(),
            page: 1,
            selected: None,
        }
    }
}

impl SearchSession {
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn selected(&self) -> Option<&Movie> {
        self.selected.as_ref()
    }

    /// Fetching is disabled while the query is blank
    pub fn is_enabled(&self) -> bool {
        !self.query.trim().is_empty()
    }

    pub fn fetch_key(&self) -> Option<FetchKey> {
        self.is_enabled()
            .then(|| FetchKey::new(self.query.clone(), self.page))
    }

    /// New search: back to the first page, selection cleared
    pub fn submit(&mut self, query: String) {
        debug!("Search submitted: '{}'", query);
        self.query = query;
        self.page = 1;
        self.selected = None;
    }

    /// Move to `page`, clamped to the known page count. Selection is kept.
    pub fn change_page(&mut self, page: u32, total_pages: u32) {
        let last = total_pages.max(1);
        self.page = page.clamp(1, last);
        debug!("Page changed to {}/{}", self.page, last);
    }

    pub fn select(&mut self, movie: Movie) {
        debug!("Selected movie {} ({})", movie.id, movie.title);
        self.selected = Some(movie);
    }

    pub fn close_selection(&mut self) {
        self.selected = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: u64) -> Movie {
        Movie {
            id,
            title: format!("Movie {id}"),
            overview: String::new(),
            release_date: String::new(),
            vote_average: 0.0,
            backdrop_path: None,
            poster_path: None,
        }
    }

    #[test]
    fn test_initial_state_is_disabled() {
        let session = SearchSession::default();
        assert_eq!(session.query(), "");
        assert_eq!(session.page(), 1);
        assert!(session.selected().is_none());
        assert!(!session.is_enabled());
        assert_eq!(session.fetch_key(), None);
    }

    #[test]
    fn test_submit_resets_page_and_selection() {
        let mut session = SearchSession::default();
        session.submit("batman".to_string());
        session.change_page(4, 5);
        session.select(movie(1));

        session.submit("superman".to_string());
        assert_eq!(session.page(), 1);
        assert!(session.selected().is_none());
        assert_eq!(session.fetch_key(), Some(FetchKey::new("superman", 1)));
    }

    #[test]
    fn test_blank_query_disables_fetch() {
        let mut session = SearchSession::default();
        session.submit("   ".to_string());
        assert!(!session.is_enabled());
        assert_eq!(session.fetch_key(), None);
    }

    #[test]
    fn test_change_page_keeps_selection() {
        let mut session = SearchSession::default();
        session.submit("batman".to_string());
        session.select(movie(7));

        session.change_page(3, 5);
        assert_eq!(session.page(), 3);
        assert_eq!(session.selected().map(|m| m.id), Some(7));
        assert_eq!(session.fetch_key(), Some(FetchKey::new("batman", 3)));
    }

    #[test]
    fn test_change_page_is_clamped() {
        let mut session = SearchSession::default();
        session.submit("batman".to_string());

        session.change_page(0, 5);
        assert_eq!(session.page(), 1);
        session.change_page(9, 5);
        assert_eq!(session.page(), 5);
        session.change_page(2, 0);
        assert_eq!(session.page(), 1);
    }

    #[test]
    fn test_close_selection() {
        let mut session = SearchSession::default();
        session.select(movie(1));
        session.close_selection();
        assert!(session.selected().is_none());
    }
}
