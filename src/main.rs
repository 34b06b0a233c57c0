//! Box Sidebar Frontend Entry Point

mod app;
mod components;
mod config;
mod filter;
mod logger;
mod models;
mod sidebar_model;
mod store;

use app::App;
use config::SidebarConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    // Log config problems at the default level, then apply the configured one
    logger::init(log::LevelFilter::Info);
    let config = SidebarConfig::from_document();
    log::set_max_level(config.level_filter());

    log::info!("[Main] Mounting sidebar (row height {}px)", config.row_height);
    mount_to_body(move || view! { <App config=config /> });
}
