//! The catalog browse state machine.
//!
//! [`CatalogBrowser`] owns the committed [`CatalogQuery`] (reflected in
//! the URL), an optional draft filter snapshot being edited in the
//! filter panel, and the incrementally loaded result list.
//!
//! Fetching is modelled as tickets instead of owned tasks: every commit
//! returns a [`FetchTicket`] tagged with a generation number and a
//! cancellation token, and results come back through
//! [`CatalogBrowser::apply_result`]. A ticket whose generation no longer
//! matches is stale and is discarded, so the rendered list always
//! matches the latest committed parameters regardless of response
//! timing. Starting a new fetch cancels the previous ticket's token;
//! [`run_fetch`] is the driver that honors it.

use tokio::time::{Duration, Instant};
use tokio_util::sync::CancellationToken;

use skynova_core::catalog::{Currency, SortKey, ViewMode, DEFAULT_PAGE_LIMIT};
use skynova_core::filters::{CatalogFilters, CatalogQuery};

use crate::api::{ClientError, ListRequest, Skin, SkinFetcher, SkinPage};

/// Quiet period after the last keystroke before a search commits.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// A started page load: the request to run plus the tags needed to
/// apply (or discard) its result.
#[derive(Debug)]
pub struct FetchTicket {
    pub request: ListRequest,
    pub cancel: CancellationToken,
    generation: u64,
    reset: bool,
}

impl FetchTicket {
    /// Whether a later commit has cancelled this load.
    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }
}

#[derive(Debug)]
struct PendingSearch {
    text: String,
    due: Instant,
}

#[derive(Debug)]
pub struct CatalogBrowser {
    query: CatalogQuery,
    draft: Option<CatalogFilters>,
    pending_search: Option<PendingSearch>,
    items: Vec<Skin>,
    total: i64,
    page_limit: i64,
    loading: bool,
    error: Option<String>,
    generation: u64,
    cancel: CancellationToken,
}

impl Default for CatalogBrowser {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogBrowser {
    pub fn new() -> Self {
        Self::with_query(CatalogQuery::default())
    }

    /// Start from a committed query, e.g. restored from a shared URL.
    pub fn with_query(query: CatalogQuery) -> Self {
        Self {
            query,
            draft: None,
            pending_search: None,
            items: Vec::new(),
            total: 0,
            page_limit: DEFAULT_PAGE_LIMIT,
            loading: false,
            error: None,
            generation: 0,
            cancel: CancellationToken::new(),
        }
    }

    /// Restore browse state from a URL query string. Never fails;
    /// unknown keys and malformed values fall back to defaults.
    pub fn from_url_query(query: &str) -> Self {
        Self::with_query(CatalogQuery::from_query_string(query))
    }

    // -- read accessors ----------------------------------------------------

    pub fn query(&self) -> &CatalogQuery {
        &self.query
    }

    /// The URL query string for the committed state (shareable link).
    pub fn url_query(&self) -> String {
        self.query.to_query_string()
    }

    pub fn items(&self) -> &[Skin] {
        &self.items
    }

    pub fn total(&self) -> i64 {
        self.total
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether a load-more would fetch anything.
    pub fn has_more(&self) -> bool {
        (self.items.len() as i64) < self.total
    }

    /// Active filter groups on the committed state (filter-button badge).
    pub fn active_filter_count(&self) -> usize {
        self.query.filters.active_group_count()
    }

    // -- fetch lifecycle ---------------------------------------------------

    /// First page load for the current committed state.
    pub fn initial_fetch(&mut self) -> FetchTicket {
        self.begin_fetch(true)
    }

    /// Re-issue the last committed query after a failure.
    pub fn retry(&mut self) -> FetchTicket {
        self.begin_fetch(true)
    }

    /// Fetch the next page with unchanged parameters and append it.
    /// Returns `None` while a load is in flight or when the list is
    /// already complete.
    pub fn load_more(&mut self) -> Option<FetchTicket> {
        if self.loading || !self.has_more() {
            return None;
        }
        Some(self.begin_fetch(false))
    }

    /// Apply the outcome of a fetch. Returns `false` when the ticket is
    /// stale, in which case nothing changes.
    pub fn apply_result(
        &mut self,
        ticket: &FetchTicket,
        result: Result<SkinPage, ClientError>,
    ) -> bool {
        if ticket.generation != self.generation {
            return false;
        }
        self.loading = false;
        match result {
            Ok(page) => {
                if ticket.reset {
                    self.items = page.items;
                } else {
                    self.items.extend(page.items);
                }
                self.total = page.total;
                self.error = None;
            }
            Err(err) => {
                self.items.clear();
                self.total = 0;
                self.error = Some(err.to_string());
            }
        }
        true
    }

    fn begin_fetch(&mut self, reset: bool) -> FetchTicket {
        self.cancel.cancel();
        self.cancel = CancellationToken::new();
        self.generation += 1;
        self.loading = true;

        let offset = if reset { 0 } else { self.items.len() as i64 };
        FetchTicket {
            request: ListRequest {
                query: self.query.clone(),
                limit: self.page_limit,
                offset,
            },
            cancel: self.cancel.clone(),
            generation: self.generation,
            reset,
        }
    }

    // -- committed-parameter changes ---------------------------------------

    /// Commit a category change and start a first-page fetch.
    pub fn set_category(&mut self, category: &str) -> FetchTicket {
        self.query.category = category.to_string();
        self.begin_fetch(true)
    }

    /// Commit a sort change and start a first-page fetch.
    pub fn set_sort(&mut self, sort: SortKey) -> FetchTicket {
        self.query.sort = sort;
        self.begin_fetch(true)
    }

    /// Record a keystroke in the search box. The text only commits once
    /// [`flush_search`](Self::flush_search) runs after the debounce
    /// quiet period; further keystrokes push the deadline out.
    pub fn set_search(&mut self, text: &str) {
        self.pending_search = Some(PendingSearch {
            text: text.to_string(),
            due: Instant::now() + SEARCH_DEBOUNCE,
        });
    }

    /// Commit the pending search if its quiet period has elapsed.
    /// Returns the fetch to start, or `None` when nothing is due or the
    /// text matches the committed search.
    pub fn flush_search(&mut self) -> Option<FetchTicket> {
        if self.pending_search.as_ref()?.due > Instant::now() {
            return None;
        }
        let pending = self.pending_search.take()?;
        let text = pending.text.trim().to_string();
        if text == self.query.search {
            return None;
        }
        self.query.search = text;
        Some(self.begin_fetch(true))
    }

    // -- cosmetic toggles (no fetch) ---------------------------------------

    pub fn set_currency(&mut self, currency: Currency) {
        self.query.currency = currency;
    }

    pub fn set_view(&mut self, view: ViewMode) {
        self.query.view = view;
    }

    // -- filter panel (draft/commit) ---------------------------------------

    /// Open the filter panel: copy the committed filters into a draft.
    pub fn open_filters(&mut self) {
        self.draft = Some(self.query.filters.clone());
    }

    /// The draft being edited, if the panel is open.
    pub fn draft_filters_mut(&mut self) -> Option<&mut CatalogFilters> {
        self.draft.as_mut()
    }

    /// Close the panel, discarding the draft.
    pub fn cancel_filters(&mut self) {
        self.draft = None;
    }

    /// Commit the draft: normalize the price range (inverted bounds are
    /// swapped) and, when the filters actually changed, start a
    /// first-page fetch.
    pub fn apply_filters(&mut self) -> Option<FetchTicket> {
        let draft = self.draft.take()?.normalize_price_range();
        if draft == self.query.filters {
            return None;
        }
        self.query.filters = draft;
        Some(self.begin_fetch(true))
    }

    /// Reset all filters. Starts a fetch only when something was set.
    pub fn clear_filters(&mut self) -> Option<FetchTicket> {
        self.draft = None;
        if self.query.filters == CatalogFilters::default() {
            return None;
        }
        self.query.filters = CatalogFilters::default();
        Some(self.begin_fetch(true))
    }
}

/// Run a ticket against a fetcher, honoring cancellation. Returns
/// `None` when the ticket was cancelled before the response arrived.
pub async fn run_fetch<F>(
    fetcher: &F,
    ticket: &FetchTicket,
) -> Option<Result<SkinPage, ClientError>>
where
    F: SkinFetcher + ?Sized,
{
    tokio::select! {
        () = ticket.cancel.cancelled() => None,
        result = fetcher.fetch_page(&ticket.request) => Some(result),
    }
}
