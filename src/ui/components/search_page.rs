use crate::search::ResultArea;
use crate::tmdb::Movie;
use crate::ui::search_context::use_movie_search;
use dioxus::prelude::*;

use super::{ErrorMessage, Loader, ModalRoot, MovieGrid, MovieModal, Pagination, SearchBar, Toaster};

/// Main search page that orchestrates the search UI components
#[component]
pub fn SearchPage() -> Element {
    let search = use_movie_search();
    let area = search.result_area();
    let selected = search.selected_movie();

    rsx! {
        div { class: "app",
            Toaster {}
            SearchBar {
                on_submit: {
                    let search = search.clone();
                    move |query: String| search.submit_search(query)
                },
            }

            main { class: "main",
                match area {
                    ResultArea::Idle => rsx! {},
                    ResultArea::Loading => rsx! {
                        Loader {}
                    },
                    ResultArea::Error(message) => rsx! {
                        ErrorMessage { message }
                    },
                    ResultArea::Results { movies, page, total_pages, is_placeholder } => rsx! {
                        div { class: if is_placeholder { "results results-refreshing" } else { "results" },
                            MovieGrid {
                                movies,
                                on_select: {
                                    let search = search.clone();
                                    move |movie: Movie| search.select_movie(movie)
                                },
                            }
                            Pagination {
                                total_pages,
                                current_page: page,
                                on_page_change: {
                                    let search = search.clone();
                                    move |page: u32| search.change_page(page)
                                },
                            }
                        }
                    },
                }
            }

            ModalRoot {
                if let Some(movie) = selected {
                    MovieModal {
                        movie,
                        on_close: {
                            let search = search.clone();
                            move |_| search.close_modal()
                        },
                    }
                }
            }
        }
    }
}
