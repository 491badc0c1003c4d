//! aichat Web Frontend
//!
//! Leptos-based WASM frontend: a landing page and a chat room.

mod app;
mod components;
mod links;
mod pages;

pub use app::App;
pub use links::RouteLinks;

use wasm_bindgen::prelude::*;

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    // Already initialised on hot reload
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(App);
}
