use crate::ui::search_context::MovieSearchProvider;
use crate::ui::toast_context::ToastProvider;
use crate::ui::{FAVICON, MAIN_CSS};
use dioxus::prelude::*;
use tracing::debug;

use super::search_page::SearchPage;

#[component]
pub fn App() -> Element {
    debug!("Rendering app component");

    rsx! {
        document::Title { "Movie Search" }
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        ToastProvider {
            MovieSearchProvider {
                SearchPage {}
            }
        }
    }
}
