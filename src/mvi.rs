//! Model-View-Intent primitives for published state.
//!
//! The pager and the detail view never mutate their observable state in
//! place. Each change is an intent folded into the current state by a
//! reducer, and the new state goes out over a `tokio::sync::watch` channel.
//!
//! ```text
//! fetch result ──→ Intent ──→ Reducer ──→ State ──→ watch subscribers
//! ```

use tokio::sync::watch;

/// Something that happened: a page arrived, a fetch failed, a screen opened.
pub trait Intent: Send + 'static {}

/// Snapshot handed to observers. Cheap to clone, comparable for change checks.
pub trait UiState: Clone + PartialEq + Default + Send + Sync + 'static {}

/// The only place state transitions happen.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}

/// Reduce `intent` into the channel's current state and notify subscribers.
pub fn dispatch<R: Reducer>(state: &watch::Sender<R::State>, intent: R::Intent) {
    state.send_modify(|current| {
        let previous = std::mem::take(current);
        *current = R::reduce(previous, intent);
    });
}
