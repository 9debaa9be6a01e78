//! Memory cache of assembled detail records with in-flight de-duplication.
//!
//! The first caller for an id starts one fetch sequence and publishes it
//! as a shared future; every caller arriving before it resolves awaits
//! that same future. The in-flight entry is removed and the cache filled
//! by the spawned fetch task itself, so the fetch settles even when all
//! callers have gone, and by the time any caller sees the result the id
//! is no longer marked in flight.

use std::collections::HashMap;
use std::sync::{Arc, Weak};

use futures::future::{BoxFuture, FutureExt, Shared};
use parking_lot::Mutex;

use crate::api::{ApiError, CatalogApi};
use crate::evolution::flatten;
use crate::sprite::SpriteTemplate;

use super::error::DetailFetchError;
use super::record::DetailRecord;

type FetchResult = Result<Arc<DetailRecord>, DetailFetchError>;
type SharedFetch = Shared<BoxFuture<'static, FetchResult>>;

/// Thread-safe detail cache and fetch coordinator.
///
/// Cheap to clone; clones share the same records and in-flight map.
#[derive(Clone)]
pub struct DetailCache {
    api: Arc<dyn CatalogApi>,
    sprites: SpriteTemplate,
    language: Arc<str>,
    state: Arc<Mutex<CacheState>>,
}

#[derive(Default)]
struct CacheState {
    records: HashMap<String, Arc<DetailRecord>>,
    in_flight: HashMap<String, SharedFetch>,
}

impl DetailCache {
    pub fn new(api: Arc<dyn CatalogApi>, sprites: SpriteTemplate, language: &str) -> Self {
        Self {
            api,
            sprites,
            language: Arc::from(language),
            state: Arc::new(Mutex::new(CacheState::default())),
        }
    }

    /// Cached record for `id`, without touching the network.
    pub fn get_cached(&self, id: &str) -> Option<Arc<DetailRecord>> {
        self.state.lock().records.get(id).cloned()
    }

    /// Cached record, or the result of the single in-flight fetch for `id`.
    pub async fn fetch_detail(&self, id: &str) -> FetchResult {
        let pending = {
            let mut state = self.state.lock();

            if let Some(record) = state.records.get(id) {
                return Ok(record.clone());
            }

            match state.in_flight.get(id) {
                Some(pending) => {
                    tracing::trace!(id = %id, "Joining in-flight detail fetch");
                    pending.clone()
                }
                None => {
                    let pending = self.start_fetch(id.to_string());
                    state.in_flight.insert(id.to_string(), pending.clone());
                    pending
                }
            }
        };

        pending.await
    }

    /// Number of cached records.
    pub fn len(&self) -> usize {
        self.state.lock().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of ids with a fetch currently running.
    pub fn in_flight_count(&self) -> usize {
        self.state.lock().in_flight.len()
    }

    fn start_fetch(&self, id: String) -> SharedFetch {
        let api = Arc::clone(&self.api);
        let sprites = self.sprites.clone();
        let language = Arc::clone(&self.language);
        // Weak so a pending future stored in the map does not keep the map alive.
        let state = Arc::downgrade(&self.state);

        // The fetch runs on its own task so it completes and settles even if
        // every caller awaiting it is dropped.
        let task = {
            let id = id.clone();
            let state = state.clone();
            tokio::spawn(async move {
                tracing::debug!(id = %id, "Fetching detail record");
                let result = load_record(api.as_ref(), &id, &sprites, &language).await;
                settle(&state, id, result)
            })
        };

        async move {
            match task.await {
                Ok(result) => result,
                Err(e) => {
                    // The task never reached `settle`; clear its marker here.
                    if let Some(state) = state.upgrade() {
                        state.lock().in_flight.remove(&id);
                    }
                    tracing::error!(id = %id, error = %e, "Detail fetch task failed");
                    Err(DetailFetchError::Interrupted {
                        id,
                        message: e.to_string(),
                    })
                }
            }
        }
        .boxed()
        .shared()
    }
}

/// Fetch detail, species and evolution chain and assemble one record.
async fn load_record(
    api: &dyn CatalogApi,
    id: &str,
    sprites: &SpriteTemplate,
    language: &str,
) -> Result<DetailRecord, ApiError> {
    let (detail, species) =
        futures::try_join!(api.fetch_entity_detail(id), api.fetch_species_meta(id))?;

    let evolutions = match species.evolution_chain_url() {
        Some(url) => flatten(&api.fetch_evolution_chain(url).await?, sprites),
        None => Vec::new(),
    };

    Ok(DetailRecord::assemble(
        detail,
        &species,
        evolutions,
        sprites,
        language,
    ))
}

/// Clear the in-flight marker and store a successful record.
fn settle(
    state: &Weak<Mutex<CacheState>>,
    id: String,
    result: Result<DetailRecord, ApiError>,
) -> FetchResult {
    let Some(state) = state.upgrade() else {
        return result
            .map(Arc::new)
            .map_err(|e| DetailFetchError::new(id, e));
    };
    let mut state = state.lock();
    state.in_flight.remove(&id);

    match result {
        Ok(record) => {
            // An existing record is never replaced.
            let record = state
                .records
                .entry(id)
                .or_insert_with(|| Arc::new(record))
                .clone();
            Ok(record)
        }
        Err(e) => {
            tracing::warn!(
                id = %id,
                error_type = e.error_type(),
                error = %e,
                "Detail fetch failed"
            );
            Err(DetailFetchError::new(id, e))
        }
    }
}
