use crate::ui::toast_context::{use_toast, ToastKind};
use dioxus::prelude::*;

/// Top-right notification, at most one at a time
#[component]
pub fn Toaster() -> Element {
    let toasts = use_toast();
    let Some(toast) = toasts.state.read().current().cloned() else {
        return rsx! {};
    };

    let kind_class = match toast.kind {
        ToastKind::Error => "toast toast-error",
        ToastKind::Info => "toast toast-info",
    };
    let id = toast.id;

    rsx! {
        div { class: "toaster", role: "status", aria_live: "polite",
            div { class: kind_class,
                span { "{toast.message}" }
                button {
                    class: "toast-dismiss",
                    aria_label: "Dismiss notification",
                    onclick: move |_| toasts.dismiss(id),
                    "✕"
                }
            }
        }
    }
}
