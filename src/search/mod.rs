pub mod controller;
pub mod notice;
pub mod session;

pub use controller::{Effects, ResultArea, SearchController, FETCH_ERROR_MESSAGE};
pub use notice::{EmptyResultNotice, NO_MOVIES_MESSAGE};
pub use session::{FetchKey, SearchSession};
