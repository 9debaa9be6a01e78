//! Incremental list loading and tag backfill.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use futures::future::join_all;
use parking_lot::Mutex;
use scopeguard::defer;
use tokio::sync::watch;

use crate::api::{ApiError, CatalogApi, NamedResource};
use crate::config::CatalogConfig;
use crate::detail::DetailCache;
use crate::mvi;
use crate::sprite::SpriteTemplate;

use super::entry::SummaryEntry;
use super::state::{ListIntent, ListReducer, ListState};

/// Outcome of a `load_next_page` call that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLoad {
    /// Another page fetch was already running; nothing was requested.
    Skipped,
    Appended { added: usize, next_offset: u32 },
}

/// Result of one backfill pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BackfillReport {
    /// Entries per batch, in processing order. One publication per batch.
    pub batch_sizes: Vec<usize>,
    pub updated: usize,
    /// Entries left untagged for the next pass.
    pub failed: usize,
}

/// Summary of an initial load or a load-more.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadSummary {
    pub appended: usize,
    pub page_failures: usize,
    pub backfill: BackfillReport,
}

/// Owns the growing list of summary entries.
///
/// Page fetches are serialized by an in-flight flag; backfill passes run
/// independently and only touch `tags`. Every change is published to
/// subscribers as a [`ListState`].
pub struct ListPager {
    api: Arc<dyn CatalogApi>,
    details: DetailCache,
    sprites: SpriteTemplate,
    page_size: u32,
    batch_size: usize,
    initial_pages: u32,
    fetching: AtomicBool,
    inner: Mutex<PagerInner>,
    state: watch::Sender<ListState>,
}

#[derive(Default)]
struct PagerInner {
    entries: Vec<SummaryEntry>,
    ids: HashSet<String>,
    next_offset: u32,
}

impl PagerInner {
    /// Append unseen ids in source order; returns how many were added.
    fn append(&mut self, items: &[NamedResource], sprites: &SpriteTemplate) -> usize {
        let before = self.entries.len();
        for item in items {
            let entry = SummaryEntry::from_resource(item, sprites);
            if self.ids.insert(entry.id.clone()) {
                self.entries.push(entry);
            } else {
                tracing::debug!(id = %entry.id, "Skipping duplicate list entry");
            }
        }
        self.entries.len() - before
    }

    fn snapshot(&self) -> Arc<Vec<SummaryEntry>> {
        Arc::new(self.entries.clone())
    }
}

impl ListPager {
    pub fn new(
        api: Arc<dyn CatalogApi>,
        details: DetailCache,
        sprites: SpriteTemplate,
        config: &CatalogConfig,
    ) -> Self {
        let (state, _) = watch::channel(ListState::default());
        Self {
            api,
            details,
            sprites,
            page_size: config.page_size,
            batch_size: config.backfill_batch_size.max(1),
            initial_pages: config.initial_pages,
            fetching: AtomicBool::new(false),
            inner: Mutex::new(PagerInner::default()),
            state,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<ListState> {
        self.state.subscribe()
    }

    pub fn state(&self) -> ListState {
        self.state.borrow().clone()
    }

    pub fn entries(&self) -> Vec<SummaryEntry> {
        self.inner.lock().entries.clone()
    }

    pub fn next_offset(&self) -> u32 {
        self.inner.lock().next_offset
    }

    pub fn is_fetching(&self) -> bool {
        self.fetching.load(Ordering::Acquire)
    }

    /// Fetch and append the next page.
    ///
    /// Returns `Skipped` without any request while another page fetch is
    /// running. A failure is returned to the caller and only becomes the
    /// published state when no entries have loaded yet.
    pub async fn load_next_page(&self) -> Result<PageLoad, ApiError> {
        if self.fetching.swap(true, Ordering::AcqRel) {
            tracing::trace!("Page fetch already in flight");
            return Ok(PageLoad::Skipped);
        }
        defer! {
            self.fetching.store(false, Ordering::Release);
        }

        let offset = self.inner.lock().next_offset;
        tracing::debug!(offset, limit = self.page_size, "Fetching list page");

        match self.api.fetch_list_page(offset, self.page_size).await {
            Ok(page) => {
                let (added, next_offset, entries) = {
                    let mut inner = self.inner.lock();
                    let added = inner.append(&page.items, &self.sprites);
                    inner.next_offset += self.page_size;
                    (added, inner.next_offset, inner.snapshot())
                };
                tracing::info!(offset, added, total = entries.len(), "List page loaded");
                self.dispatch(ListIntent::PageLoaded { entries });
                Ok(PageLoad::Appended { added, next_offset })
            }
            Err(e) => {
                tracing::warn!(
                    offset,
                    error_type = e.error_type(),
                    error = %e,
                    "List page fetch failed"
                );
                self.dispatch(ListIntent::PageFailed {
                    message: e.to_string(),
                });
                Err(e)
            }
        }
    }

    /// Fill `tags` for every untagged entry, one batch at a time.
    ///
    /// Fetches inside a batch run concurrently; the batch is published
    /// once all of them have settled. Entries whose fetch failed keep empty
    /// tags and are picked up again by the next pass.
    pub async fn backfill_tags(&self) -> BackfillReport {
        let pending: Vec<(usize, String)> = {
            let inner = self.inner.lock();
            inner
                .entries
                .iter()
                .enumerate()
                .filter(|(_, entry)| entry.needs_tags())
                .map(|(index, entry)| (index, entry.id.clone()))
                .collect()
        };

        let mut report = BackfillReport::default();

        for batch in pending.chunks(self.batch_size) {
            let results =
                join_all(batch.iter().map(|(_, id)| self.details.fetch_detail(id))).await;

            let entries = {
                let mut inner = self.inner.lock();
                for ((index, id), result) in batch.iter().zip(results) {
                    match result {
                        Ok(record) => {
                            // Entries are append-only, so the index still names this id.
                            if let Some(entry) = inner.entries.get_mut(*index) {
                                if entry.id == *id && entry.needs_tags() {
                                    entry.tags = record.tags.clone();
                                    report.updated += 1;
                                }
                            }
                        }
                        Err(e) => {
                            tracing::debug!(id = %id, error = %e, "Tag backfill failed");
                            report.failed += 1;
                        }
                    }
                }
                inner.snapshot()
            };

            report.batch_sizes.push(batch.len());
            self.dispatch(ListIntent::TagsBackfilled { entries });
        }

        if !report.batch_sizes.is_empty() {
            tracing::info!(
                batches = report.batch_sizes.len(),
                updated = report.updated,
                failed = report.failed,
                "Tag backfill pass complete"
            );
        }
        report
    }

    /// Fill the first screen: the configured number of pages, then a backfill pass.
    pub async fn initial_load(&self) -> LoadSummary {
        let mut summary = self.load_pages(self.initial_pages).await;
        summary.backfill = self.backfill_tags().await;
        summary
    }

    /// Fetch up to `count` pages in order without backfilling tags.
    ///
    /// A failed page is counted and the next one is still attempted.
    pub async fn load_pages(&self, count: u32) -> LoadSummary {
        let mut summary = LoadSummary::default();
        for _ in 0..count {
            summary.record_page(self.load_next_page().await);
        }
        summary
    }

    /// Next page followed by a backfill pass, as triggered by scrolling.
    pub async fn load_more(&self) -> LoadSummary {
        let mut summary = LoadSummary::default();
        summary.record_page(self.load_next_page().await);
        summary.backfill = self.backfill_tags().await;
        summary
    }

    fn dispatch(&self, intent: ListIntent) {
        mvi::dispatch::<ListReducer>(&self.state, intent);
    }
}

impl LoadSummary {
    fn record_page(&mut self, result: Result<PageLoad, ApiError>) {
        match result {
            Ok(PageLoad::Appended { added, .. }) => self.appended += added,
            Ok(PageLoad::Skipped) => {}
            Err(_) => self.page_failures += 1,
        }
    }
}
