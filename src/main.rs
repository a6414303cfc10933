//! CRM SBL Andorra
//!
//! Single-page CRM for the SBL medical-supply operation, built with Leptos
//! (WASM).
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It lists clinic accounts and registers new ones against the
//! hosted store over its REST interface; the store owns all persisted state.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
