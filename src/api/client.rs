use std::time::Instant;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::traits::CatalogApi;
use super::types::{EvolutionChainResponse, ListPage, RawChainNode, RawDetail, RawSpecies};

/// HTTP implementation of [`CatalogApi`] backed by a shared `reqwest::Client`.
///
/// The client is built once at start-up and handed in, so every gateway
/// call reuses the same connection pool.
#[derive(Clone)]
pub struct PokeApiClient {
    client: Client,
    base_url: String,
}

impl PokeApiClient {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T, ApiError> {
        let start = Instant::now();
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network {
                url: url.clone(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url = %url, status = %status, "Catalog API returned error status");
            return Err(ApiError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| ApiError::Network {
            url: url.clone(),
            source: e,
        })?;

        tracing::debug!(
            url = %url,
            bytes = body.len(),
            latency_ms = start.elapsed().as_millis() as u64,
            "Catalog API response received"
        );

        serde_json::from_slice(&body).map_err(|e| ApiError::Decode { url, source: e })
    }
}

#[async_trait]
impl CatalogApi for PokeApiClient {
    async fn fetch_list_page(&self, offset: u32, limit: u32) -> Result<ListPage, ApiError> {
        let url = self.endpoint(&format!("pokemon?limit={}&offset={}", limit, offset));
        self.get_json(url).await
    }

    async fn fetch_entity_detail(&self, id: &str) -> Result<RawDetail, ApiError> {
        self.get_json(self.endpoint(&format!("pokemon/{}", id))).await
    }

    async fn fetch_species_meta(&self, id: &str) -> Result<RawSpecies, ApiError> {
        self.get_json(self.endpoint(&format!("pokemon-species/{}", id)))
            .await
    }

    async fn fetch_evolution_chain(&self, url: &str) -> Result<RawChainNode, ApiError> {
        let response: EvolutionChainResponse = self.get_json(url.to_string()).await?;
        Ok(response.chain)
    }
}
