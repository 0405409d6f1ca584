use crate::config::use_config;
use crate::search::{Effects, FetchKey, ResultArea, SearchController};
use crate::tmdb::{Movie, MovieSource};
use crate::ui::toast_context::{use_toast, ToastContext};
use crate::ui::AppContext;
use dioxus::prelude::*;
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

/// Application controller shared with the search page components
#[derive(Clone)]
pub struct MovieSearchContext {
    controller: Signal<SearchController>,
    source: Arc<dyn MovieSource>,
    toasts: ToastContext,
}

impl MovieSearchContext {
    pub fn submit_search(&self, query: String) {
        let mut controller = self.controller;
        let effects = controller.write().submit(query, Instant::now());
        self.apply(effects);
    }

    pub fn change_page(&self, page: u32) {
        let mut controller = self.controller;
        let effects = controller.write().change_page(page, Instant::now());
        self.apply(effects);
    }

    pub fn select_movie(&self, movie: Movie) {
        let mut controller = self.controller;
        controller.write().select(movie);
    }

    pub fn close_modal(&self) {
        let mut controller = self.controller;
        controller.write().close_selection();
    }

    pub fn result_area(&self) -> ResultArea {
        self.controller.read().result_area()
    }

    pub fn selected_movie(&self) -> Option<Movie> {
        self.controller.read().selected().cloned()
    }

    fn apply(&self, effects: Effects) {
        if let Some(message) = effects.notification {
            self.toasts.error(message);
        }
        if let Some(key) = effects.fetch {
            self.fetch(key);
        }
    }

    fn fetch(&self, key: FetchKey) {
        let ctx = self.clone();
        spawn(async move {
            debug!("Requesting '{}' page {}", key.query, key.page);
            let result = ctx.source.search_movies(&key.query, key.page).await;
            let mut controller = ctx.controller;
            let effects = controller.write().resolve(&key, result, Instant::now());
            ctx.apply(effects);
        });
    }
}

/// Provider component to make the search controller available to the page
#[component]
pub fn MovieSearchProvider(children: Element) -> Element {
    let config = use_config();
    let app_context = use_context::<AppContext>();
    let toasts = use_toast();
    let controller = use_signal(|| SearchController::new(config.cache));

    use_context_provider(|| MovieSearchContext {
        controller,
        source: app_context.source.clone(),
        toasts,
    });

    rsx! {
        {children}
    }
}

pub fn use_movie_search() -> MovieSearchContext {
    use_context::<MovieSearchContext>()
}
