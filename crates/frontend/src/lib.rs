pub mod api;
pub mod app;
pub mod dashboards;
pub mod layout;
pub mod routes;
pub mod shared;

use contracts::api::{ApiConfig, DeploymentMode};
use leptos::prelude::*;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    // Configuration is resolved once here and handed down through context.
    let config = ApiConfig::from_build_env();
    log::info!(
        "Starting dashboard ({:?}), API base URL: {}",
        DeploymentMode::current(),
        config.base_url
    );
    if !config.has_api_key() {
        log::warn!("DASHBOARD_API_KEY was not set at build time, the backend will reject requests");
    }

    leptos::mount::mount_to_body(move || view! { <app::App config=config /> });
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
