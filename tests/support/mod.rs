#![allow(dead_code)]

pub mod fixtures;
pub mod mock_movie_source;

pub use fixtures::*;
pub use mock_movie_source::MockMovieSource;

/// Initialize tracing for tests with proper test output handling
pub fn tracing_init() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}
