use dioxus::prelude::*;

/// Marker context: an overlay mount point exists above this component
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverlayMount;

/// Overlay layer rendered outside the main document flow.
/// Modal content must be placed inside it to be displayed.
#[component]
pub fn ModalRoot(children: Element) -> Element {
    use_context_provider(|| OverlayMount);

    rsx! {
        div { id: "modal-root", {children} }
    }
}

/// Returns true when rendered inside a [`ModalRoot`]
pub fn use_overlay_mount() -> bool {
    try_use_context::<OverlayMount>().is_some()
}
