//! Kanban Board Entry Point

mod api;
mod app;
mod assets;
mod components;
mod config;
mod context;
mod error;
mod logging;
mod storage;
mod store;

use app::App;
use config::BoardConfig;
use leptos::prelude::*;
use tracing::Level;

fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) { Level::DEBUG } else { Level::INFO };
    let config = BoardConfig::default().with_log_level(level);
    logging::init(config.log_level);
    tracing::info!(endpoint = %config.endpoint, "starting kanban board");

    mount_to_body(move || view! { <App config=config /> });
}
