use dioxus::prelude::*;

/// Spinner shown while the first page of a search loads
#[component]
pub fn Loader() -> Element {
    rsx! {
        div { class: "loader",
            div { class: "loader-spinner" }
            p { class: "loader-text", "Loading movies, please wait..." }
        }
    }
}
