//! AgenticOS - web front end for AI automation agents
//!
//! Users sign in with an OpenAI API key, then drive an email agent and a
//! document agent hosted by a separate backend. Sessions and per-agent
//! action history live in browser storage. Built with Leptos and WebAssembly.

#![recursion_limit = "4096"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
