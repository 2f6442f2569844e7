//! Food Dashboard Frontend Entry Point

mod models;
mod collection;
mod config;
mod api;
mod actions;
mod context;
mod store;
mod logging;
mod components;
mod dashboard;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = logging::init() {
        web_sys::console::warn_1(&format!("Console logger not installed: {}", err).into());
    }
    mount_to_body(App);
}
