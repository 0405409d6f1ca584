use crate::config::use_config;
use crate::tmdb::Movie;
use dioxus::prelude::*;

use super::escape_key::use_escape_key;
use super::modal_root::use_overlay_mount;
use super::scroll_lock::use_scroll_lock;

/// Detail overlay for one movie.
///
/// Closes on backdrop click, on the close button and on Escape anywhere in
/// the document; all three go through `on_close`. Background scroll is locked
/// while it is open. Renders nothing outside a `ModalRoot`.
#[component]
pub fn MovieModal(movie: Movie, on_close: EventHandler<()>) -> Element {
    let has_mount = use_overlay_mount();
    use_scroll_lock(has_mount);
    use_escape_key(has_mount, on_close);

    if !has_mount {
        return rsx! {};
    }

    rsx! {
        MovieDetails { movie, on_close }
    }
}

/// Overlay markup: backdrop, close button, image and movie details
#[component]
pub fn MovieDetails(movie: Movie, on_close: EventHandler<()>) -> Element {
    let config = use_config();
    let image_url = config.images.backdrop(movie.backdrop_path.as_deref());
    let rating = format_rating(movie.vote_average);

    rsx! {
        div {
            class: "modal-backdrop",
            role: "dialog",
            aria_modal: "true",
            tabindex: "-1",
            onmounted: move |element| {
                spawn(async move {
                    let _ = element.set_focus(true).await;
                });
            },
            onclick: move |_| on_close.call(()),
            div {
                class: "modal",
                onclick: move |evt| evt.stop_propagation(),
                button {
                    class: "modal-close",
                    aria_label: "Close modal",
                    onclick: move |_| on_close.call(()),
                    "×"
                }
                img {
                    class: "modal-image",
                    src: "{image_url}",
                    alt: "{movie.title}",
                }
                div { class: "modal-content",
                    h2 { "{movie.title}" }
                    p { "{movie.overview}" }
                    p {
                        strong { "Release Date: " }
                        "{movie.release_date}"
                    }
                    p {
                        strong { "Rating: " }
                        "{rating}"
                    }
                }
            }
        }
    }
}

/// TMDB vote average as sent, out of ten ("7.234/10")
pub fn format_rating(vote_average: f64) -> String {
    format!("{}/10", vote_average)
}
