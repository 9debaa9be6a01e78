//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod fake_api;
pub mod mock_server;

use std::sync::Arc;

use pocketdex::api::CatalogApi;
use pocketdex::config::Config;
use pocketdex::container::AppContainer;

pub use fake_api::{FakeApi, Gate};

/// Config with the given page and batch sizes and default everything else.
pub fn test_config(page_size: u32, batch_size: usize) -> Config {
    let mut config = Config::default();
    config.catalog.page_size = page_size;
    config.catalog.backfill_batch_size = batch_size;
    config
}

/// Container wired to a fake gateway.
pub fn container_with(api: Arc<FakeApi>, config: &Config) -> AppContainer {
    let api: Arc<dyn CatalogApi> = api;
    AppContainer::with_api(api, config)
}
