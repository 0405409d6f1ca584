pub mod cache;

pub use cache::{CachePolicy, FetchDecision, FetchStatus, QueryCache, QueryView, Resolution};
