pub mod client;
pub mod images;
pub mod models;

pub use client::{MovieSource, TmdbClient, TmdbError};
pub use images::ImageUrls;
pub use models::{Movie, MoviesResponse};
