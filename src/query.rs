//! Query store: filter-driven, paginated record search.
//!
//! Independent of the dashboard polling cycle -- fetches happen only when
//! the user submits the form or flips a page. Failure policy differs from
//! the dashboard store on purpose: a failed search clears the result page
//! to empty instead of retaining stale rows, so the table never shows
//! results that do not match the filters the user believes are applied.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use tracing::warn;

use crate::error::Result;
use crate::models::{QueryPage, QueryParams};

/// Backend seam for the record search. Production uses
/// [`ApiClient`](crate::http::ApiClient); tests use controllable fakes.
#[async_trait]
pub trait RecordSearch: Send + Sync {
    async fn search(&self, params: &QueryParams) -> Result<QueryPage>;
}

struct QueryState {
    params: QueryParams,
    data: QueryPage,
    loading: bool,
}

/// Store for the interactive query page.
pub struct QueryStore {
    backend: Arc<dyn RecordSearch>,
    state: Mutex<QueryState>,
    /// Sequence number of the most recently dispatched fetch. A settling
    /// fetch that no longer holds the latest number is discarded, so a
    /// slow stale response can never overwrite a fresher one.
    latest_request: AtomicU64,
}

impl QueryStore {
    /// Create a store with default params and an empty result page.
    pub fn new(backend: Arc<dyn RecordSearch>) -> Self {
        Self {
            backend,
            state: Mutex::new(QueryState {
                params: QueryParams::default(),
                data: QueryPage::default(),
                loading: false,
            }),
            latest_request: AtomicU64::new(0),
        }
    }

    /// Current filter/pagination params.
    pub fn params(&self) -> QueryParams {
        self.state.lock().params.clone()
    }

    /// The last committed result page.
    pub fn data(&self) -> QueryPage {
        self.state.lock().data.clone()
    }

    /// Whether a fetch dispatched last is still in flight.
    pub fn loading(&self) -> bool {
        self.state.lock().loading
    }

    /// Merge changes into the current params without fetching.
    ///
    /// Fetch timing stays with the caller ("type filters, then submit").
    /// When filter fields change, the caller must also set `page` back
    /// to 1 -- the previous page number may be out of range under the new
    /// criteria.
    pub fn set_params(&self, update: impl FnOnce(&mut QueryParams)) {
        update(&mut self.state.lock().params);
    }

    /// Restore default filters and page 1. Typically followed by
    /// [`fetch_data`](Self::fetch_data).
    pub fn reset_params(&self) {
        self.state.lock().params = QueryParams::default();
    }

    /// Issue one search with the params current *at this call*, and commit
    /// the result page on settlement.
    ///
    /// `loading` is raised before dispatch and cleared when the round that
    /// owns the result slot settles, on every path. A transport failure or
    /// a non-success envelope code clears the result page to empty. If a
    /// newer fetch was dispatched while this one was in flight, this
    /// response is discarded entirely.
    pub async fn fetch_data(&self) {
        let ticket = self.latest_request.fetch_add(1, Ordering::SeqCst) + 1;
        let params = {
            let mut state = self.state.lock();
            state.loading = true;
            state.params.clone()
        };

        let outcome = self.backend.search(&params).await;

        let mut state = self.state.lock();
        if self.latest_request.load(Ordering::SeqCst) != ticket {
            // Superseded while in flight; the newer request owns the slot.
            return;
        }
        state.data = match outcome {
            Ok(page) => page,
            Err(e) => {
                warn!(error = %e, "record search failed, clearing result page");
                QueryPage::default()
            }
        };
        state.loading = false;
    }
}
