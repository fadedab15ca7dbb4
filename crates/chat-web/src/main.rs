//! Browser entry point (built with `trunk`).

use chat_core::ChatConfig;
use chat_web::App;
use leptos::prelude::*;

fn init_logging(level: &str) {
    let level = level.parse::<log::Level>().unwrap_or(log::Level::Info);
    wasm_logger::init(wasm_logger::Config::new(level));
}

fn main() {
    console_error_panic_hook::set_once();

    let config = chat_web::config::load();
    init_logging(config.as_ref().map_or("info", |c| c.log_level.as_str()));

    let config = config.unwrap_or_else(|err| {
        tracing::warn!(%err, "invalid build configuration, using defaults");
        ChatConfig::default()
    });
    tracing::info!(api_url = %config.api_url, "starting chat");

    leptos::mount::mount_to_body(move || view! { <App config=config.clone() /> });
}
