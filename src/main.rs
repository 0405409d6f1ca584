use marquee::config::Config;
use marquee::ui::{make_config, App};
use marquee::{logging, AppContext};
use tracing::info;

fn main() {
    logging::init();

    let config = Config::load();
    info!(
        "Starting movie search against {} (token configured: {})",
        config.api_base_url,
        config.tmdb_token.is_some()
    );

    let context = AppContext::new(config);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(make_config())
        .with_context(context)
        .launch(App);
}
