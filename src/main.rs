//! Compare Hub Frontend Entry Point

mod actions;
mod animation;
mod api;
mod app;
mod chart;
mod components;
mod config;
mod context;
mod error;
mod forms;
mod models;
mod notify;
mod page;
mod pages;
mod share;
mod shortcuts;
mod suggestions;
mod table_sort;
mod theme;

use app::App;
use config::AppConfig;
use leptos::prelude::*;
use page::PagePayload;

fn main() {
    console_error_panic_hook::set_once();

    let (config, warning) = AppConfig::load();
    if let Err(e) = rolling_logger::init(rolling_logger::level_from_str(&config.log_level), config.log_capacity) {
        web_sys::console::error_1(&format!("Logger already set: {}", e).into());
    }
    if let Some(warning) = warning {
        log::warn!("[CONFIG] {}", warning);
    }

    let payload = PagePayload::load();
    mount_to_body(move || view! { <App config=config payload=payload /> });
}
