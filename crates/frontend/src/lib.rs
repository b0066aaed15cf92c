//! Browser front end for the ImpactEcho donator dashboard.
//!
//! The `dashboard` controller does the work; this crate supplies its seams
//! in the browser: a Yew view model, gloo-net for the backend, gloo-timers
//! for animation and web storage for the wallet address.

mod app;
mod browser;
mod components;
mod pages;
mod view;

pub use app::{App, Route};

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start() {
    yew::Renderer::<App>::new().render();
}
