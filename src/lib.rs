//! Data layer for a PokéAPI catalog client.
//!
//! - [`api`]: typed gateway to the REST API.
//! - [`evolution`]: evolution tree flattening.
//! - [`detail`]: detail cache with in-flight de-duplication, plus the
//!   detail-screen state.
//! - [`pager`]: paginated list with tag backfill.
//!
//! State meant for a UI is published through `tokio::sync::watch`
//! channels and changed only by the reducers in [`mvi`].

pub mod api;
pub mod config;
pub mod container;
pub mod detail;
pub mod evolution;
pub mod mvi;
pub mod pager;
pub mod sprite;
pub mod telemetry;
