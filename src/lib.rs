// Library exports for integration tests and reusable components

pub mod config;
pub mod logging;
pub mod query;
pub mod search;
pub mod tmdb;
pub mod ui;

// Re-export AppContext at crate root for easier access
pub use ui::AppContext;
