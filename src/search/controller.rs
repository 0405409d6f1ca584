use crate::query::{CachePolicy, FetchDecision, QueryCache, QueryView, Resolution};
use crate::search::notice::{EmptyResultNotice, NO_MOVIES_MESSAGE};
use crate::search::session::{FetchKey, SearchSession};
use crate::tmdb::{Movie, MoviesResponse, TmdbError};
use std::time::Instant;
use tracing::{info, warn};

pub const FETCH_ERROR_MESSAGE: &str = "There was an error, please try again...";

/// What the main result area shows
#[derive(Debug, Clone, PartialEq)]
pub enum ResultArea {
    /// Nothing to show: blank query or an empty result
    Idle,
    Loading,
    Error(String),
    Results {
        movies: Vec<Movie>,
        page: u32,
        total_pages: u32,
        /// Previous key's data while the current key loads
        is_placeholder: bool,
    },
}

impl ResultArea {
    pub fn shows_pagination(&self) -> bool {
        matches!(self, ResultArea::Results { total_pages, .. } if *total_pages > 1)
    }
}

/// Follow-up work produced by a state change
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Effects {
    /// Key the caller must fetch and hand back through `resolve`
    pub fetch: Option<FetchKey>,
    /// Notification to show once
    pub notification: Option<&'static str>,
}

/// Search controller: session state, fetch cache and the empty-result notice.
///
/// State changes return [`Effects`]; the caller runs the requested fetch and
/// hands the outcome back through [`resolve`].
///
/// [`resolve`]: SearchController::resolve
#[derive(Debug, Clone)]
pub struct SearchController {
    session: SearchSession,
    cache: QueryCache<FetchKey, MoviesResponse>,
    notice: EmptyResultNotice,
}

impl Default for SearchController {
    fn default() -> Self {
        Self::new(CachePolicy::default())
    }
}

impl SearchController {
    pub fn new(policy: CachePolicy) -> Self {
        Self {
            session: SearchSession::default(),
            cache: QueryCache::new(policy),
            notice: EmptyResultNotice::default(),
        }
    }

    pub fn session(&self) -> &SearchSession {
        &self.session
    }

    pub fn selected(&self) -> Option<&Movie> {
        self.session.selected()
    }

    pub fn submit(&mut self, query: String, now: Instant) -> Effects {
        self.session.submit(query);
        self.activate(now)
    }

    pub fn change_page(&mut self, page: u32, now: Instant) -> Effects {
        let total_pages = self.total_pages();
        self.session.change_page(page, total_pages);
        self.activate(now)
    }

    pub fn select(&mut self, movie: Movie) {
        self.session.select(movie);
    }

    pub fn close_selection(&mut self) {
        self.session.close_selection();
    }

    pub fn resolve(
        &mut self,
        key: &FetchKey,
        result: Result<MoviesResponse, TmdbError>,
        now: Instant,
    ) -> Effects {
        let result = result.map_err(|e| {
            warn!("Search '{}' page {} failed: {}", key.query, key.page, e);
            e.to_string()
        });
        match self.cache.resolve(key, result, now) {
            Resolution::Applied => Effects {
                fetch: None,
                notification: self.take_notification(),
            },
            Resolution::Stale => Effects::default(),
        }
    }

    pub fn view(&self) -> QueryView<MoviesResponse> {
        match self.session.fetch_key() {
            Some(key) => self.cache.view(&key),
            None => QueryView::default(),
        }
    }

    /// Total pages of whatever is currently displayed, 0 when unknown
    pub fn total_pages(&self) -> u32 {
        self.view()
            .data
            .map(|data| data.total_pages)
            .unwrap_or_default()
    }

    pub fn result_area(&self) -> ResultArea {
        let view = self.view();
        let empty_placeholder =
            view.is_placeholder && view.data.as_ref().is_some_and(MoviesResponse::is_empty);
        if view.is_loading || empty_placeholder {
            return ResultArea::Loading;
        }
        if view.is_error {
            return ResultArea::Error(FETCH_ERROR_MESSAGE.to_string());
        }
        match view.data {
            Some(data) if !data.results.is_empty() => ResultArea::Results {
                movies: data.results,
                page: self.session.page(),
                total_pages: data.total_pages,
                is_placeholder: view.is_placeholder,
            },
            _ => ResultArea::Idle,
        }
    }

    fn take_notification(&mut self) -> Option<&'static str> {
        let key = self.session.fetch_key();
        let view = self.view();
        self.notice
            .observe(key.as_ref(), &view)
            .then_some(NO_MOVIES_MESSAGE)
    }

    fn activate(&mut self, now: Instant) -> Effects {
        let Some(key) = self.session.fetch_key() else {
            self.take_notification();
            return Effects::default();
        };

        let fetch = match self.cache.begin(key.clone(), now) {
            FetchDecision::Start => {
                info!("Fetching '{}' page {}", key.query, key.page);
                Some(key)
            }
            FetchDecision::InFlight | FetchDecision::Fresh => None,
        };

        Effects {
            fetch,
            notification: self.take_notification(),
        }
    }
}
