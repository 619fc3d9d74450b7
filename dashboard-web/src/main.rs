//! Asseti - portfolio dashboard for wallets on Base
//!
//! Client-side rendered Leptos app. Wallet access goes through the injected
//! EIP-1193 provider; holdings and chart data are sample datasets.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

pub mod app;
pub mod components;
pub mod config;
pub mod pages;
pub mod services;
pub mod state;
pub mod utils;

use app::App;
use config::AppConfig;

#[wasm_bindgen(start)]
pub fn main() {
    components::error_boundary::install_panic_hook();

    let config = AppConfig::from_build_env();
    wasm_logger::init(wasm_logger::Config::new(config.log_level));
    log::info!(
        "Asseti starting (network: {}, chain {})",
        config.network.name,
        config.network.chain_id
    );

    hide_loading_screen();
    leptos::mount::mount_to_body(move || view! { <App config=config/> });
}

/// Hide the static loading element from index.html once wasm is running.
fn hide_loading_screen() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("no document, loading screen left in place");
        return;
    };

    let Some(loading_element) = document.get_element_by_id("leptos-loading") else {
        log::debug!("loading element not found");
        return;
    };

    if let Some(html_element) = loading_element.dyn_ref::<HtmlElement>() {
        if let Err(e) = html_element.class_list().add_1("hidden") {
            log::warn!("could not hide loading screen: {:?}", e);
        }
    }
    if let Err(e) = loading_element.set_attribute("style", "display: none !important;") {
        log::warn!("could not set loading screen style: {:?}", e);
    }
}
