//! Published state for the detail screen.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::watch;

use crate::mvi::{self, Intent, Reducer, UiState};

use super::cache::DetailCache;
use super::error::DetailFetchError;
use super::record::DetailRecord;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum DetailState {
    #[default]
    Loading,
    Ready(Arc<DetailRecord>),
    Failed {
        message: String,
    },
}

impl UiState for DetailState {}

impl DetailState {
    pub fn record(&self) -> Option<&Arc<DetailRecord>> {
        match self {
            Self::Ready(record) => Some(record),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub enum DetailIntent {
    /// Navigated to a new entity; clear whatever was shown before.
    Opened,
    Loaded(Arc<DetailRecord>),
    /// Only surfaces while nothing is shown yet.
    Failed { message: String },
}

impl Intent for DetailIntent {}

pub struct DetailReducer;

impl Reducer for DetailReducer {
    type State = DetailState;
    type Intent = DetailIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DetailIntent::Opened => DetailState::Loading,
            DetailIntent::Loaded(record) => DetailState::Ready(record),
            DetailIntent::Failed { message } => match state {
                DetailState::Loading => DetailState::Failed { message },
                other => other,
            },
        }
    }
}

/// Detail-screen controller: resolves one id at a time through the cache
/// and publishes the outcome.
pub struct DetailView {
    cache: DetailCache,
    current: Mutex<Option<String>>,
    state: watch::Sender<DetailState>,
}

impl DetailView {
    pub fn new(cache: DetailCache) -> Self {
        let (state, _) = watch::channel(DetailState::default());
        Self {
            cache,
            current: Mutex::new(None),
            state,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<DetailState> {
        self.state.subscribe()
    }

    pub fn state(&self) -> DetailState {
        self.state.borrow().clone()
    }

    /// Show `id`, from the cache when possible.
    ///
    /// `initial_entry` resets the screen to `Loading` first; a refresh of
    /// the same id keeps the current record visible if the fetch fails.
    /// Results for an id the user has navigated away from are dropped.
    pub async fn load_detail(
        &self,
        id: &str,
        initial_entry: bool,
    ) -> Result<Arc<DetailRecord>, DetailFetchError> {
        *self.current.lock() = Some(id.to_string());

        if initial_entry {
            self.dispatch(DetailIntent::Opened);
        }

        if let Some(record) = self.cache.get_cached(id) {
            self.dispatch(DetailIntent::Loaded(record.clone()));
            return Ok(record);
        }

        let result = self.cache.fetch_detail(id).await;

        if self.current.lock().as_deref() != Some(id) {
            tracing::debug!(id = %id, "Discarding detail result for stale selection");
            return result;
        }

        match &result {
            Ok(record) => self.dispatch(DetailIntent::Loaded(record.clone())),
            Err(e) => self.dispatch(DetailIntent::Failed {
                message: e.to_string(),
            }),
        }
        result
    }

    fn dispatch(&self, intent: DetailIntent) {
        mvi::dispatch::<DetailReducer>(&self.state, intent);
    }
}
