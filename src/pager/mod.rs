//! Paginated catalog list with background tag enrichment.

mod entry;
mod loader;
mod state;

pub use entry::SummaryEntry;
pub use loader::{BackfillReport, ListPager, LoadSummary, PageLoad};
pub use state::{ListIntent, ListReducer, ListState};
