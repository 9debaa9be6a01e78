use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Remote API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL for the REST API (e.g., "https://pokeapi.co/api/v2/").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Sprite URL template; `{id}` is replaced with the entity id.
    #[serde(default = "default_sprite_url_template")]
    pub sprite_url_template: String,
    /// Request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 10).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
    /// Max idle connections per host (default: 8).
    #[serde(default = "default_pool_max_idle_per_host")]
    pub pool_max_idle_per_host: u32,
    /// User-Agent header sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// List paging and enrichment settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Entries requested per page (default: 60).
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    /// Detail fetches issued together during tag backfill (default: 20).
    #[serde(default = "default_backfill_batch_size")]
    pub backfill_batch_size: usize,
    /// Pages fetched by the initial load (default: 2).
    #[serde(default = "default_initial_pages")]
    pub initial_pages: u32,
    /// Language code used to select the description text (default: "en").
    #[serde(default = "default_description_language")]
    pub description_language: String,
}

fn default_base_url() -> String {
    "https://pokeapi.co/api/v2/".to_string()
}

fn default_sprite_url_template() -> String {
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/{id}.png".to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    10
}

fn default_pool_max_idle_per_host() -> u32 {
    8
}

fn default_user_agent() -> String {
    format!("pocketdex/{}", env!("CARGO_PKG_VERSION"))
}

fn default_page_size() -> u32 {
    60
}

fn default_backfill_batch_size() -> usize {
    20
}

fn default_initial_pages() -> u32 {
    2
}

fn default_description_language() -> String {
    "en".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            sprite_url_template: default_sprite_url_template(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
            pool_max_idle_per_host: default_pool_max_idle_per_host(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            backfill_batch_size: default_backfill_batch_size(),
            initial_pages: default_initial_pages(),
            description_language: default_description_language(),
        }
    }
}
