pub mod app;
pub mod error_message;
pub mod escape_key;
pub mod loader;
pub mod modal_root;
pub mod movie_grid;
pub mod movie_modal;
pub mod pagination;
pub mod scroll_lock;
pub mod search_bar;
pub mod search_page;
pub mod toaster;

pub use app::App;
pub use error_message::ErrorMessage;
pub use loader::Loader;
pub use modal_root::ModalRoot;
pub use movie_grid::{MovieCard, MovieGrid};
pub use movie_modal::{MovieDetails, MovieModal};
pub use pagination::Pagination;
pub use search_bar::SearchBar;
pub use search_page::SearchPage;
pub use toaster::Toaster;
