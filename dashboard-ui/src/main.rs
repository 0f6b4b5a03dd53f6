//! Quick Commerce Dynamics Dashboard
//!
//! Systems-thinking dashboard on 10-minute delivery, built with Leptos (WASM).
//!
//! # Architecture
//!
//! Client-side rendered (CSR) Leptos application. The view state, data
//! loader, tab router and chart configurations come from the
//! `quickcommerce` crate; this crate only turns a `ContentBlock` into DOM
//! and draws charts on a canvas.
//!
//! Metric groups come from the built-in snapshot unless a provider URL is
//! entered in the footer. The URL lasts for the page session only.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
