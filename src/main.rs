//! To-Do List Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod error;
mod filter;
mod models;
mod persistence;
mod render;
mod router;
mod store;
mod task_list;
mod toast;
mod validation;

use app::App;
use config::TodoConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let loaded = TodoConfig::from_document();
    let config = loaded.as_ref().cloned().unwrap_or_default();

    _ = console_log::init_with_level(config.log_level.to_level().unwrap_or(log::Level::Info));
    log::set_max_level(config.log_level);
    if let Err(e) = &loaded {
        log::warn!("ignoring invalid data-config: {}", e);
    }

    mount_to_body(move || view! { <App config=config /> });
}
