use dioxus::prelude::*;

/// Persistent error shown in place of the grid
#[component]
pub fn ErrorMessage(message: String) -> Element {
    rsx! {
        div { class: "error-message", role: "alert",
            p { "{message}" }
        }
    }
}
