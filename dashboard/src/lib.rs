//! ==============================================================================
//! lib.rs - Museum Admin Dashboard
//! ==============================================================================
//!
//! purpose:
//!     leptos wasm admin screen for the museum collection. lists, filters,
//!     creates, edits and deletes museums through the museum http api.
//!
//! architecture:
//!     - leptos csr (client-side rendering)
//!     - compiled to wasm, runs in browser
//!     - screen logic in `screen`, free of any dom types
//!     - backend calls in `api` via fetch
//!
//! ==============================================================================

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use wasm_bindgen::prelude::*;

pub mod api;
pub mod config;
pub mod dialogs;
pub mod screen;
mod components;

use components::{Header, MuseumsPage};

// ==============================================================================
// main entry point
// ==============================================================================

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("museum admin starting");
    mount_to_body(App);
}

// ==============================================================================
// app component
// ==============================================================================

#[component]
fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Museum Admin" />
        <Header />
        <div class="container">
            <MuseumsPage />
        </div>
    }
}
