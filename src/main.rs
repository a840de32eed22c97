//! AlertIndia Dashboard
//!
//! National identity-update monitoring dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Analytics dashboard with canvas-drawn charts
//! - Live alert feed from the AlertIndia backend
//! - Scripted assistant chat widget
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It talks to the AlertIndia backend over HTTP; navigation is
//! purely in-memory view switching, there is no URL routing.

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
