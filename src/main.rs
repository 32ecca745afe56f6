//! Cafe Menu Frontend Entry Point

mod models;
mod config;
mod logger;
mod commands;
mod validation;
mod search;
mod store;
mod draft;
mod view_state;
mod context;
mod components;
mod app;

#[cfg(test)]
mod testing;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let config = AppConfig::from_env();
    logger::init(config.log_level);
    log::info!("starting cafe menu, api at {}", config.api_base_url);
    mount_to_body(move || view! { <App config=config /> });
}
