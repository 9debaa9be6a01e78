//! Gateway trait shared by the HTTP client and test doubles.

use async_trait::async_trait;

use super::error::ApiError;
use super::types::{ListPage, RawChainNode, RawDetail, RawSpecies};

/// The four remote calls the catalog core depends on.
///
/// Inputs are trusted: ids come from earlier API responses, never from
/// users, so implementations perform no validation of their own.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// One page of `{name, url}` references starting at `offset`.
    async fn fetch_list_page(&self, offset: u32, limit: u32) -> Result<ListPage, ApiError>;

    /// Stats, types and sprites for one entity.
    async fn fetch_entity_detail(&self, id: &str) -> Result<RawDetail, ApiError>;

    /// Flavor text and the evolution chain link for one species.
    async fn fetch_species_meta(&self, id: &str) -> Result<RawSpecies, ApiError>;

    /// Root node of the evolution chain at an absolute URL.
    async fn fetch_evolution_chain(&self, url: &str) -> Result<RawChainNode, ApiError>;
}
