//! RecrutPlus Frontend Entry Point

mod api;
mod app;
mod auth;
mod components;
mod datetime;
mod filters;
mod guard;
mod lifecycle;
mod models;
mod pages;
mod session;
mod validation;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
