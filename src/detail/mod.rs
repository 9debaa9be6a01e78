//! Detail records: assembly, caching and the detail-screen state.

mod cache;
mod error;
mod record;
mod view;

pub use cache::DetailCache;
pub use error::DetailFetchError;
pub use record::{DetailRecord, Metric};
pub use view::{DetailIntent, DetailReducer, DetailState, DetailView};

pub use crate::evolution::EvolutionNode;
