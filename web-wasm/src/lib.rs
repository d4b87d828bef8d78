//! Floating Arrangements Web App (Leptos + WASM)

mod api;
mod app;
mod components;
mod config;

pub use api::inquiry::{inquiry_body, status_outcome, FetchTransport};
pub use config::{load_site_config, SITE_CONFIG_ELEMENT_ID};

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    gloo::console::debug!("mounting Floating Arrangements");
    leptos::mount::mount_to_body(app::App);
}
