//! In-memory catalog gateway with call counters and failure injection.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::sync::watch;

use pocketdex::api::types::{
    FlavorTextEntry, ResourceLink, Sprites, StatSlot, TypeSlot,
};
use pocketdex::api::{
    ApiError, CatalogApi, ListPage, NamedResource, RawChainNode, RawDetail, RawSpecies,
};

/// A latch that holds fake calls until opened.
#[derive(Clone)]
pub struct Gate {
    tx: Arc<watch::Sender<bool>>,
}

impl Gate {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(false);
        Self { tx: Arc::new(tx) }
    }

    pub fn open(&self) {
        self.tx.send_replace(true);
    }

    pub async fn wait(&self) {
        let mut rx = self.tx.subscribe();
        let _ = rx.wait_for(|open| *open).await;
    }
}

/// Fake gateway serving a catalog of `total` entities with ids `1..=total`.
pub struct FakeApi {
    total: u32,
    list_calls: AtomicUsize,
    list_failures: AtomicUsize,
    list_gate: Mutex<Option<Gate>>,
    detail_calls: Mutex<HashMap<String, usize>>,
    species_calls: AtomicUsize,
    chain_calls: AtomicUsize,
    failing_ids: Mutex<HashSet<String>>,
    detail_gate: Mutex<Option<Gate>>,
    detail_delay: Mutex<Option<Duration>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl FakeApi {
    pub fn new(total: u32) -> Arc<Self> {
        Arc::new(Self {
            total,
            list_calls: AtomicUsize::new(0),
            list_failures: AtomicUsize::new(0),
            list_gate: Mutex::new(None),
            detail_calls: Mutex::new(HashMap::new()),
            species_calls: AtomicUsize::new(0),
            chain_calls: AtomicUsize::new(0),
            failing_ids: Mutex::new(HashSet::new()),
            detail_gate: Mutex::new(None),
            detail_delay: Mutex::new(None),
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
        })
    }

    /// Make the next `n` list calls fail with a transport-level error.
    pub fn fail_next_list_calls(&self, n: usize) {
        self.list_failures.store(n, Ordering::SeqCst);
    }

    /// Hold list calls until the returned gate is opened.
    pub fn gate_list(&self) -> Gate {
        let gate = Gate::new();
        *self.list_gate.lock() = Some(gate.clone());
        gate
    }

    /// Hold entity detail calls until the returned gate is opened.
    pub fn gate_details(&self) -> Gate {
        let gate = Gate::new();
        *self.detail_gate.lock() = Some(gate.clone());
        gate
    }

    /// Make each entity detail call take `delay` instead of a single yield.
    pub fn delay_details(&self, delay: Duration) {
        *self.detail_delay.lock() = Some(delay);
    }

    pub fn fail_id(&self, id: &str) {
        self.failing_ids.lock().insert(id.to_string());
    }

    pub fn heal_id(&self, id: &str) {
        self.failing_ids.lock().remove(id);
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn detail_calls(&self, id: &str) -> usize {
        self.detail_calls.lock().get(id).copied().unwrap_or(0)
    }

    pub fn total_detail_calls(&self) -> usize {
        self.detail_calls.lock().values().sum()
    }

    pub fn species_calls(&self) -> usize {
        self.species_calls.load(Ordering::SeqCst)
    }

    pub fn chain_calls(&self) -> usize {
        self.chain_calls.load(Ordering::SeqCst)
    }

    /// Highest number of entity detail calls observed running at once.
    pub fn max_concurrent_details(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    fn resource(kind: &str, id: u32) -> NamedResource {
        NamedResource {
            name: format!("mon-{}", id),
            url: format!("https://pokeapi.co/api/v2/{}/{}/", kind, id),
        }
    }

    fn status_error(url: String) -> ApiError {
        ApiError::Status { url, status: 500 }
    }
}

#[async_trait]
impl CatalogApi for FakeApi {
    async fn fetch_list_page(&self, offset: u32, limit: u32) -> Result<ListPage, ApiError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);

        let gate = self.list_gate.lock().clone();
        if let Some(gate) = gate {
            gate.wait().await;
        }

        let should_fail = self
            .list_failures
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if should_fail {
            return Err(Self::status_error(format!(
                "fake://pokemon?limit={}&offset={}",
                limit, offset
            )));
        }

        let end = (offset + limit).min(self.total);
        let items = (offset + 1..=end)
            .map(|id| Self::resource("pokemon", id))
            .collect();
        Ok(ListPage { items })
    }

    async fn fetch_entity_detail(&self, id: &str) -> Result<RawDetail, ApiError> {
        *self.detail_calls.lock().entry(id.to_string()).or_insert(0) += 1;

        let running = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(running, Ordering::SeqCst);

        let gate = self.detail_gate.lock().clone();
        let delay = *self.detail_delay.lock();
        match (gate, delay) {
            (Some(gate), _) => gate.wait().await,
            (None, Some(delay)) => tokio::time::sleep(delay).await,
            (None, None) => tokio::task::yield_now().await,
        }

        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        if self.failing_ids.lock().contains(id) {
            return Err(Self::status_error(format!("fake://pokemon/{}", id)));
        }

        let numeric: u32 = id.parse().unwrap_or(0);
        Ok(RawDetail {
            id: numeric,
            name: format!("mon-{}", id),
            height: 10,
            weight: 100,
            types: vec![TypeSlot {
                slot: 1,
                kind: NamedResource {
                    name: format!("tag-{}", id),
                    url: String::new(),
                },
            }],
            stats: vec![StatSlot {
                base_stat: 50,
                stat: NamedResource {
                    name: "hp".to_string(),
                    url: String::new(),
                },
            }],
            sprites: Sprites::default(),
        })
    }

    async fn fetch_species_meta(&self, id: &str) -> Result<RawSpecies, ApiError> {
        self.species_calls.fetch_add(1, Ordering::SeqCst);
        Ok(RawSpecies {
            flavor_text_entries: vec![FlavorTextEntry {
                flavor_text: format!("Entry\nfor {}", id),
                language: NamedResource {
                    name: "en".to_string(),
                    url: String::new(),
                },
            }],
            evolution_chain: Some(ResourceLink {
                url: format!("fake://evolution-chain/{}/", id),
            }),
        })
    }

    async fn fetch_evolution_chain(&self, url: &str) -> Result<RawChainNode, ApiError> {
        self.chain_calls.fetch_add(1, Ordering::SeqCst);
        let id: u32 = pocketdex::api::id_from_url(url).parse().unwrap_or(0);
        Ok(RawChainNode {
            species: Self::resource("pokemon-species", id),
            evolves_to: vec![RawChainNode {
                species: Self::resource("pokemon-species", id + 1),
                evolves_to: Vec::new(),
            }],
        })
    }
}
