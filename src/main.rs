#![allow(non_snake_case)]

mod app;
mod browser;
mod components;
pub mod context;
mod navigation;
mod pages;
mod theme;

use tracing::Level;

fn main() {
    if dioxus::logger::init(Level::INFO).is_err() {
        gloo::console::warn!("tracing subscriber already installed");
    }
    tracing::info!("Starting folio-web");

    dioxus::launch(app::App);
}
