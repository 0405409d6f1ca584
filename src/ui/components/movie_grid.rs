use crate::config::use_config;
use crate::tmdb::Movie;
use dioxus::prelude::*;

/// Grid of movie cards. Renders nothing for an empty list.
#[component]
pub fn MovieGrid(movies: Vec<Movie>, on_select: EventHandler<Movie>) -> Element {
    if movies.is_empty() {
        return rsx! {};
    }

    rsx! {
        ul { class: "movie-grid",
            for movie in movies {
                MovieCard {
                    key: "{movie.id}",
                    movie: movie.clone(),
                    on_select,
                }
            }
        }
    }
}

/// Individual movie card: poster and title
#[component]
pub fn MovieCard(movie: Movie, on_select: EventHandler<Movie>) -> Element {
    let config = use_config();
    let poster_url = config.images.poster(movie.poster_path.as_deref());

    rsx! {
        li {
            div {
                class: "movie-card",
                role: "button",
                tabindex: "0",
                onclick: {
                    let movie = movie.clone();
                    move |_| on_select.call(movie.clone())
                },
                onkeydown: {
                    let movie = movie.clone();
                    move |event: KeyboardEvent| {
                        if event.key() == Key::Enter {
                            on_select.call(movie.clone());
                        }
                    }
                },
                img {
                    class: "movie-card-image",
                    src: "{poster_url}",
                    alt: "{movie.title}",
                }
                h2 { class: "movie-card-title", "{movie.title}" }
            }
        }
    }
}
