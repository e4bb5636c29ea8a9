//! Todo List Frontend Entry Point

mod api;
mod app;
mod components;
mod gate;
mod graphql;
mod models;
mod session;
mod store;
mod validate;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
