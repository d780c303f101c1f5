//! School Health Portal Frontend Entry Point

mod actions;
mod api;
mod app;
mod auth;
mod campaign_utils;
mod chat_history;
mod components;
mod config;
mod context;
mod error;
mod logging;
mod markdown;
mod medication;
mod models;
mod pages;
mod storage;
mod store;
mod validation;
mod workflows;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init(config::AppConfig::load().level_filter());
    mount_to_body(App);
}
