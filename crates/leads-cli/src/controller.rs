//! Search orchestration: one controller owns the record set, the in-flight
//! phase, and the view it drives.
//!
//! `trigger` and `export_current_results` take `&self`, so the controller can
//! be shared between input sources. The state lock is never held across the
//! webhook await; the phase guard is what keeps two searches from overlapping.

use std::sync::{Mutex, MutexGuard, PoisonError};

use leads_core::messages::{
    search_completed, NOTHING_TO_EXPORT, PROMPT_FOR_TERM, SEARCH_EMPTY, SEARCH_FAILED,
    SEARCH_IN_PROGRESS,
};
use leads_core::SearchRecord;
use leads_report::{render_error_row, render_results, workbook_bytes, ReportError, EXPORT_FILENAME};
use leads_webhook::{normalize_response, WebhookClient, WebhookError};
use maud::PreEscaped;

use crate::view::SearchView;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Phase {
    Idle,
    Searching,
}

#[derive(Debug)]
pub(crate) enum TriggerOutcome {
    /// Trimmed term was empty; no request was made.
    EmptyTerm,
    /// Another search is in flight; this call changed nothing.
    AlreadySearching,
    /// The webhook answered. `malformed` marks a non-list body read as zero results.
    Completed { count: usize, malformed: bool },
    Failed(WebhookError),
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum ExportOutcome {
    NothingToExport,
    Delivered { rows: usize },
}

struct ControllerState<V> {
    phase: Phase,
    records: Vec<SearchRecord>,
    view: V,
}

pub(crate) struct SearchController<V> {
    client: WebhookClient,
    state: Mutex<ControllerState<V>>,
}

impl<V: SearchView> SearchController<V> {
    pub(crate) fn new(client: WebhookClient, view: V) -> Self {
        Self {
            client,
            state: Mutex::new(ControllerState {
                phase: Phase::Idle,
                records: Vec::new(),
                view,
            }),
        }
    }

    /// Runs one search for `term`.
    ///
    /// The busy state is cleared on every exit path, including a panic or the
    /// returned future being dropped mid-request.
    pub(crate) async fn trigger(&self, term: &str) -> TriggerOutcome {
        let term = term.trim();

        let _in_flight = {
            let mut state = self.lock();
            if state.phase == Phase::Searching {
                tracing::debug!(term, "search already in flight; ignoring trigger");
                return TriggerOutcome::AlreadySearching;
            }
            if term.is_empty() {
                state.view.set_status(PROMPT_FOR_TERM);
                return TriggerOutcome::EmptyTerm;
            }
            state.begin_search();
            InFlight { controller: self }
        };

        tracing::info!(term, "search started");
        let result = self.client.search(term).await.map(normalize_response);

        let mut guard = self.lock();
        let state = &mut *guard;
        match result {
            Ok(normalized) => {
                let count = normalized.records.len();
                state.records = normalized.records;
                render(&mut state.view, &state.records);
                tracing::info!(term, count, malformed = normalized.malformed, "search completed");
                TriggerOutcome::Completed {
                    count,
                    malformed: normalized.malformed,
                }
            }
            Err(error) => {
                tracing::error!(term, %error, "webhook call failed");
                state.view.set_status(SEARCH_FAILED);
                state.view.set_table(render_error_row());
                TriggerOutcome::Failed(error)
            }
        }
        // `guard` drops before `_in_flight`, so the cleanup can take the lock.
    }

    /// Exports the held record set as `busca_leads.xlsx`.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError`] if encoding or delivery fails.
    pub(crate) fn export_current_results(&self) -> Result<ExportOutcome, ReportError> {
        let mut guard = self.lock();
        let state = &mut *guard;

        if state.records.is_empty() {
            state.view.notify(NOTHING_TO_EXPORT);
            return Ok(ExportOutcome::NothingToExport);
        }

        let bytes = workbook_bytes(&state.records)?;
        state.view.deliver_download(EXPORT_FILENAME, &bytes)?;
        tracing::info!(rows = state.records.len(), bytes = bytes.len(), "export delivered");
        Ok(ExportOutcome::Delivered {
            rows: state.records.len(),
        })
    }

    pub(crate) fn records(&self) -> Vec<SearchRecord> {
        self.lock().records.clone()
    }

    #[cfg(test)]
    pub(crate) fn phase(&self) -> Phase {
        self.lock().phase
    }

    pub(crate) fn with_view<R>(&self, f: impl FnOnce(&V) -> R) -> R {
        f(&self.lock().view)
    }

    fn lock(&self) -> MutexGuard<'_, ControllerState<V>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<V: SearchView> ControllerState<V> {
    fn begin_search(&mut self) {
        self.phase = Phase::Searching;
        self.records.clear();
        self.view.set_busy(true);
        self.view.set_table(PreEscaped(String::new()));
        self.view.set_results_visible(false);
        self.view.set_export_enabled(false);
        self.view.set_status(SEARCH_IN_PROGRESS);
    }

    fn end_search(&mut self) {
        self.phase = Phase::Idle;
        self.view.set_busy(false);
    }
}

/// Returns the controller to idle when dropped.
struct InFlight<'a, V: SearchView> {
    controller: &'a SearchController<V>,
}

impl<V: SearchView> Drop for InFlight<'_, V> {
    fn drop(&mut self) {
        self.controller.lock().end_search();
    }
}

/// Draws `records` into `view`: rows plus status, or the "no results" row.
fn render<V: SearchView>(view: &mut V, records: &[SearchRecord]) {
    view.set_table(render_results(records));

    if records.is_empty() {
        view.set_status(SEARCH_EMPTY);
        return;
    }

    view.set_results_visible(true);
    view.set_export_enabled(true);
    view.set_status(&search_completed(records.len()));
}

#[cfg(test)]
#[path = "controller_test.rs"]
mod tests;
