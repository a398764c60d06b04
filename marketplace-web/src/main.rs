//! Redeem Market frontend (Leptos, client-side rendered)

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

mod app;
mod components;
mod pages;
mod services;
mod state;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Redeem Market starting");

    leptos::mount::mount_to_body(|| view! { <App/> });
}
