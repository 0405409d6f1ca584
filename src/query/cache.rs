use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::time::{Duration, Instant};
use tracing::debug;

/// Timing policy for the query cache
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CachePolicy {
    /// Ready entries younger than this are served without refetching
    pub stale_time: Duration,
    /// Idle entries older than this are evicted
    pub cache_time: Duration,
}

impl Default for CachePolicy {
    fn default() -> Self {
        Self {
            stale_time: Duration::from_secs(60),
            cache_time: Duration::from_secs(5 * 60),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStatus {
    Pending,
    Ready,
    Failed,
}

/// What the caller must do after activating a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchDecision {
    /// Issue a request and report back through `resolve`
    Start,
    /// A request for this key is already running
    InFlight,
    /// Cached data is recent enough
    Fresh,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The key is current, the view changes
    Applied,
    /// The key was superseded; stored for reuse but not shown
    Stale,
}

#[derive(Debug, Clone)]
struct CacheEntry<V> {
    status: FetchStatus,
    data: Option<V>,
    error: Option<String>,
    updated_at: Instant,
}

/// What the UI should render for the current key
#[derive(Debug, Clone, PartialEq)]
pub struct QueryView<V> {
    pub data: Option<V>,
    pub error: Option<String>,
    pub is_loading: bool,
    pub is_fetching: bool,
    pub is_error: bool,
    pub is_placeholder: bool,
}

impl<V> Default for QueryView<V> {
    fn default() -> Self {
        Self {
            data: None,
            error: None,
            is_loading: false,
            is_fetching: false,
            is_error: false,
            is_placeholder: false,
        }
    }
}

/// Key-based fetch cache with request deduplication and placeholder retention.
///
/// Only one key is current at a time. While the current key has no data of its
/// own, the data of the most recent key that had some is shown instead, so the
/// UI never flashes empty between pages.
#[derive(Debug, Clone)]
pub struct QueryCache<K, V> {
    policy: CachePolicy,
    entries: HashMap<K, CacheEntry<V>>,
    current: Option<K>,
    placeholder: Option<K>,
}

impl<K, V> QueryCache<K, V>
where
    K: Clone + Eq + Hash + Debug,
    V: Clone,
{
    pub fn new(policy: CachePolicy) -> Self {
        Self {
            policy,
            entries: HashMap::new(),
            current: None,
            placeholder: None,
        }
    }

    pub fn current(&self) -> Option<&K> {
        self.current.as_ref()
    }

    pub fn status(&self, key: &K) -> Option<FetchStatus> {
        self.entries.get(key).map(|entry| entry.status)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Make `key` current and decide whether it needs a network request
    pub fn begin(&mut self, key: K, now: Instant) -> FetchDecision {
        if self.current.as_ref() != Some(&key) {
            if let Some(previous) = self.current.take() {
                let previous_has_data = self
                    .entries
                    .get(&previous)
                    .is_some_and(|entry| entry.data.is_some());
                if previous_has_data {
                    self.placeholder = Some(previous);
                }
            }
            self.current = Some(key.clone());
        }

        self.evict_expired(now);

        let stale_time = self.policy.stale_time;
        match self.entries.get_mut(&key) {
            Some(entry) if entry.status == FetchStatus::Pending => {
                debug!("Query {:?} already in flight", key);
                FetchDecision::InFlight
            }
            Some(entry)
                if entry.status == FetchStatus::Ready
                    && now.saturating_duration_since(entry.updated_at) < stale_time =>
            {
                debug!("Query {:?} served from cache", key);
                FetchDecision::Fresh
            }
            Some(entry) => {
                // Stale or failed: refetch, keep whatever data we had
                entry.status = FetchStatus::Pending;
                entry.error = None;
                FetchDecision::Start
            }
            None => {
                self.entries.insert(
                    key,
                    CacheEntry {
                        status: FetchStatus::Pending,
                        data: None,
                        error: None,
                        updated_at: now,
                    },
                );
                FetchDecision::Start
            }
        }
    }

    /// Record the outcome of a request started by `begin`
    pub fn resolve(&mut self, key: &K, result: Result<V, String>, now: Instant) -> Resolution {
        let entry = self.entries.entry(key.clone()).or_insert(CacheEntry {
            status: FetchStatus::Pending,
            data: None,
            error: None,
            updated_at: now,
        });

        match result {
            Ok(data) => {
                entry.status = FetchStatus::Ready;
                entry.data = Some(data);
                entry.error = None;
            }
            Err(error) => {
                entry.status = FetchStatus::Failed;
                entry.error = Some(error);
            }
        }
        entry.updated_at = now;

        if self.current.as_ref() == Some(key) {
            Resolution::Applied
        } else {
            debug!("Query {:?} resolved after being superseded", key);
            Resolution::Stale
        }
    }

    /// Presentation state for `key`
    pub fn view(&self, key: &K) -> QueryView<V> {
        let Some(entry) = self.entries.get(key) else {
            return QueryView::default();
        };

        match entry.status {
            FetchStatus::Ready => QueryView {
                data: entry.data.clone(),
                ..QueryView::default()
            },
            FetchStatus::Failed => QueryView {
                error: entry.error.clone(),
                is_error: true,
                ..QueryView::default()
            },
            FetchStatus::Pending => {
                if entry.data.is_some() {
                    return QueryView {
                        data: entry.data.clone(),
                        is_fetching: true,
                        ..QueryView::default()
                    };
                }
                let placeholder = self
                    .placeholder
                    .as_ref()
                    .filter(|placeholder| *placeholder != key)
                    .and_then(|placeholder| self.entries.get(placeholder))
                    .and_then(|entry| entry.data.clone());
                let is_placeholder = placeholder.is_some();
                QueryView {
                    is_loading: !is_placeholder,
                    data: placeholder,
                    is_fetching: true,
                    is_placeholder,
                    ..QueryView::default()
                }
            }
        }
    }

    /// Drop idle entries older than the cache time
    pub fn evict_expired(&mut self, now: Instant) {
        let cache_time = self.policy.cache_time;
        let current = self.current.clone();
        let placeholder = self.placeholder.clone();
        let before = self.entries.len();

        self.entries.retain(|key, entry| {
            Some(key) == current.as_ref()
                || Some(key) == placeholder.as_ref()
                || entry.status == FetchStatus::Pending
                || now.saturating_duration_since(entry.updated_at) < cache_time
        });

        let evicted = before - self.entries.len();
        if evicted > 0 {
            debug!("Evicted {} expired query entries", evicted);
        }
    }
}

impl<K, V> Default for QueryCache<K, V>
where
    K: Clone + Eq + Hash + Debug,
    V: Clone,
{
    fn default() -> Self {
        Self::new(CachePolicy::default())
    }
}
