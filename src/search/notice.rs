use crate::query::QueryView;
use crate::search::session::FetchKey;
use crate::tmdb::MoviesResponse;

pub const NO_MOVIES_MESSAGE: &str = "No movies found for your request.";

/// Decides when the "no movies found" notification fires.
///
/// It fires once per key whose own (non-placeholder) data came back empty, and
/// re-renders with the same result never fire it again.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct EmptyResultNotice {
    notified: Option<FetchKey>,
}

impl EmptyResultNotice {
    /// Returns true when the notification should be shown now
    pub fn observe(&mut self, key: Option<&FetchKey>, view: &QueryView<MoviesResponse>) -> bool {
        let Some(key) = key else {
            self.notified = None;
            return false;
        };

        if self.notified.as_ref().is_some_and(|notified| notified != key) {
            self.notified = None;
        }

        let is_empty_result = !view.is_loading
            && !view.is_placeholder
            && view.data.as_ref().is_some_and(MoviesResponse::is_empty);

        if is_empty_result && self.notified.is_none() {
            self.notified = Some(key.clone());
            return true;
        }
        false
    }
}
