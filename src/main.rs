//! Forms Client Entry Point

mod models;
mod config;
mod error;
mod draft;
mod records;
mod guard;
mod commands;
mod context;
mod components;
mod app;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    wasm_logger::init(wasm_logger::Config::new(level));

    let config = AppConfig::load();
    log::info!("[Config] Backend origin: {}", config.backend_base_url());

    mount_to_body(move || view! { <App config=config /> });
}
