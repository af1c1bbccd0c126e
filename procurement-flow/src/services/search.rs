//! Debounced search with last-issued-wins sequencing.
//!
//! Every query issues a ticket from a generation counter; a result is
//! applied only while its ticket is still the newest one. An older
//! in-flight request that resolves late is dropped, never displayed.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use console_core::error::FlowError;
use console_core::pagination::Page;
use tracing::debug;

/// Monotonic request-generation counter.
#[derive(Debug, Default)]
pub struct SearchSequencer {
    generation: AtomicU64,
}

/// Proof of which generation a request belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTicket(u64);

impl SearchSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a ticket for a new query, superseding all earlier ones.
    pub fn issue(&self) -> SearchTicket {
        SearchTicket(self.generation.fetch_add(1, Ordering::AcqRel) + 1)
    }

    pub fn is_current(&self, ticket: SearchTicket) -> bool {
        self.generation.load(Ordering::Acquire) == ticket.0
    }

    /// Apply an outcome to `results` if its ticket is still current.
    /// Returns whether the outcome was applied.
    pub fn apply<T>(
        &self,
        ticket: SearchTicket,
        outcome: Result<Page<T>, FlowError>,
        results: &mut SearchResults<T>,
    ) -> bool {
        if !self.is_current(ticket) {
            debug!(generation = ticket.0, "stale search result dropped");
            return false;
        }
        results.apply(outcome);
        true
    }
}

/// What the host renders: the latest result set, or zero results plus
/// an error banner. A failed search never crashes the workflow.
#[derive(Debug, Clone)]
pub struct SearchResults<T> {
    items: Vec<T>,
    error: Option<String>,
}

impl<T> Default for SearchResults<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            error: None,
        }
    }
}

impl<T> SearchResults<T> {
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn reset(&mut self) {
        self.items.clear();
        self.error = None;
    }

    fn apply(&mut self, outcome: Result<Page<T>, FlowError>) {
        match outcome {
            Ok(page) => {
                self.items = page.items;
                self.error = None;
            }
            Err(e) => {
                self.items.clear();
                self.error = Some(e.to_string());
            }
        }
    }
}

/// One search box: debounce window + sequencer + latest results.
#[derive(Debug)]
pub struct SearchSession<T> {
    sequencer: SearchSequencer,
    debounce: Duration,
    results: SearchResults<T>,
}

impl<T> SearchSession<T> {
    pub fn new(debounce: Duration) -> Self {
        Self {
            sequencer: SearchSequencer::new(),
            debounce,
            results: SearchResults::default(),
        }
    }

    pub fn results(&self) -> &SearchResults<T> {
        &self.results
    }

    /// Clear results and invalidate every in-flight request, so a
    /// stale response cannot repopulate an emptied list.
    pub fn clear(&mut self) {
        let _ = self.sequencer.issue();
        self.results.reset();
    }

    /// Run one debounced query. An empty query short-circuits (no call
    /// issued, results cleared); a query superseded during the
    /// debounce window or while in flight is abandoned. Returns
    /// whether this query's outcome was applied.
    pub async fn run<F, Fut>(&mut self, query: &str, fetch: F) -> bool
    where
        F: FnOnce(String) -> Fut,
        Fut: Future<Output = Result<Page<T>, FlowError>>,
    {
        if query.trim().is_empty() {
            self.clear();
            return false;
        }

        let ticket = self.sequencer.issue();
        tokio::time::sleep(self.debounce).await;
        if !self.sequencer.is_current(ticket) {
            return false;
        }

        let outcome = fetch(query.to_string()).await;
        self.sequencer.apply(ticket, outcome, &mut self.results)
    }
}
