pub mod app;
pub mod app_context;
pub mod components;
pub mod search_context;
pub mod toast_context;

pub use app::*;
pub use app_context::AppContext;
pub use components::*;
pub use search_context::{use_movie_search, MovieSearchContext, MovieSearchProvider};
pub use toast_context::{use_toast, ToastContext, ToastProvider};
