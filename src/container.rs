//! Wiring of gateway, cache, pager and detail view.

use std::sync::Arc;

use crate::api::{CatalogApi, PokeApiClient};
use crate::config::{Config, ConfigError};
use crate::detail::{DetailCache, DetailView};
use crate::pager::ListPager;
use crate::sprite::SpriteTemplate;

/// Holds the single HTTP client and every component built on it.
///
/// Components receive their collaborators explicitly; nothing here is
/// global, so tests can build a container around a fake gateway.
pub struct AppContainer {
    pub api: Arc<dyn CatalogApi>,
    pub details: DetailCache,
    pub pager: Arc<ListPager>,
    pub detail_view: Arc<DetailView>,
}

impl AppContainer {
    /// Build the HTTP client from config and wire everything to it.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        config.validate()?;
        let client = config.api.build_http_client()?;
        let api: Arc<dyn CatalogApi> = Arc::new(PokeApiClient::new(client, &config.api.base_url));
        Ok(Self::with_api(api, config))
    }

    /// Wire the components around an existing gateway.
    pub fn with_api(api: Arc<dyn CatalogApi>, config: &Config) -> Self {
        let sprites = SpriteTemplate::new(&config.api.sprite_url_template);
        let details = DetailCache::new(
            Arc::clone(&api),
            sprites.clone(),
            &config.catalog.description_language,
        );
        let pager = Arc::new(ListPager::new(
            Arc::clone(&api),
            details.clone(),
            sprites,
            &config.catalog,
        ));
        let detail_view = Arc::new(DetailView::new(details.clone()));

        Self {
            api,
            details,
            pager,
            detail_view,
        }
    }
}
