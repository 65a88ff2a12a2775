//! Legal.AI Web Frontend
//!
//! Leptos CSR app. Chats, accounts and contact messages all live in the
//! browser's `localStorage`; there are no network calls.

mod app;
mod components;
mod pages;
mod state;
mod storage;

pub use app::App;
pub use storage::BrowserStorage;

use wasm_bindgen::prelude::*;

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
