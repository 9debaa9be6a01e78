use std::sync::Arc;

use crate::mvi::{Intent, Reducer, UiState};

use super::entry::SummaryEntry;

/// Published state of the catalog list.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ListState {
    #[default]
    Loading,
    Ready(Arc<Vec<SummaryEntry>>),
    /// Only reachable while no entries have loaded.
    Failed { message: String },
}

impl UiState for ListState {}

impl ListState {
    pub fn entries(&self) -> &[SummaryEntry] {
        match self {
            Self::Ready(entries) => entries.as_slice(),
            _ => &[],
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

#[derive(Debug, Clone)]
pub enum ListIntent {
    PageLoaded { entries: Arc<Vec<SummaryEntry>> },
    PageFailed { message: String },
    TagsBackfilled { entries: Arc<Vec<SummaryEntry>> },
}

impl Intent for ListIntent {}

pub struct ListReducer;

impl Reducer for ListReducer {
    type State = ListState;
    type Intent = ListIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ListIntent::PageLoaded { entries } | ListIntent::TagsBackfilled { entries } => {
                ListState::Ready(entries)
            }
            ListIntent::PageFailed { message } => {
                if state.entries().is_empty() {
                    ListState::Failed { message }
                } else {
                    // Stale entries stay visible; the caller still gets the error.
                    state
                }
            }
        }
    }
}
