//! Typed gateway to the remote catalog REST API.
//!
//! [`CatalogApi`] is the seam the cache and pager depend on;
//! [`PokeApiClient`] is the HTTP implementation.

mod client;
mod error;
mod traits;
pub mod types;

pub use client::PokeApiClient;
pub use error::ApiError;
pub use traits::CatalogApi;
pub use types::{id_from_url, ListPage, NamedResource, RawChainNode, RawDetail, RawSpecies};
