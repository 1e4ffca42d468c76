#![allow(warnings)]
//! Item Ticker Frontend Entry Point

mod models;
mod error;
mod config;
mod api;
mod poller;
mod strip;
mod feed;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
