use dioxus::desktop::{Config as DioxusConfig, WindowBuilder};
use dioxus::prelude::*;

pub const FAVICON: Asset = asset!("/assets/favicon.svg");
pub const MAIN_CSS: Asset = asset!("/assets/main.css");

pub const WINDOW_TITLE: &str = "Movie Search";

pub fn make_config() -> DioxusConfig {
    DioxusConfig::default().with_window(make_window())
}

fn make_window() -> WindowBuilder {
    WindowBuilder::new()
        .with_title(WINDOW_TITLE)
        .with_always_on_top(false)
        .with_inner_size(dioxus::desktop::LogicalSize::new(1200, 800))
}
