#![allow(warnings)]
//! EPIC Issues Dashboard Frontend Entry Point

mod api;
mod app;
mod browser;
mod components;
mod config;
mod context;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = config::load_config();
    if let Some(level) = config.log_level.to_level() {
        let _ = console_log::init_with_level(level);
    }
    log::info!(
        "[APP] starting, api base {:?}, poll every {:?}",
        config.api_base_url,
        config.poll_interval
    );

    mount_to_body(move || view! { <App config=config /> });
}
