//! Special Move Ranking Frontend Entry Point

mod api;
mod app;
mod bootstrap;
mod components;
mod config;
mod error;
mod favorite;
mod liff;
mod models;
mod ranking;
mod storage;
mod store;
#[cfg(test)]
mod testing;

use std::rc::Rc;

use app::App;
use leptos::prelude::*;

use crate::api::{HttpRankingApi, RankingApi};
use crate::bootstrap::IdentityProvider;
use crate::config::AppConfig;
use crate::liff::LiffIdentity;
use crate::storage::{BrowserStorage, KeyValueStore};

fn main() {
    console_error_panic_hook::set_once();

    // Ignore the error if a logger is already installed
    drop(console_log::init_with_level(log::Level::Debug));

    log::info!("Special move ranking starting...");

    mount_to_body(|| {
        let config = AppConfig::default();
        let identity: Rc<dyn IdentityProvider> = Rc::new(LiffIdentity);
        let storage: Rc<dyn KeyValueStore> = Rc::new(BrowserStorage);
        let api: Rc<dyn RankingApi> = Rc::new(HttpRankingApi::new(config.clone()));

        view! { <App config=config identity=identity storage=storage api=api /> }
    });
}
