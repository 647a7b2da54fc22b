#![allow(warnings)]
//! Art Quiz Frontend Entry Point

mod api;
mod app;
mod catalog;
mod charts;
mod components;
mod config;
mod context;
mod dashboard;
mod error;
mod logging;
mod models;
mod pages;
mod routes;
mod session;
mod store;

use app::{App, ConfigErrorScreen};
use config::PageConfig;
use leptos::prelude::*;
use log::LevelFilter;

fn main() {
    console_error_panic_hook::set_once();

    match PageConfig::from_document() {
        Ok(config) => {
            logging::init(config.log_level);
            log::info!("mounting {:?} page for {}", config.page, config.genre.as_str());
            mount_to_body(move || view! { <App config=config /> });
        }
        Err(error) => {
            logging::init(LevelFilter::Info);
            log::error!("page configuration: {}", error);
            mount_to_body(move || view! { <ConfigErrorScreen error=error /> });
        }
    }
}
