// src/controller.rs
//! Pagination & incremental-load controller.
//!
//! `Catalog` owns every piece of mutable catalog state: the loaded books, the
//! page cursor, the total reported by the server, the in-flight flag and the
//! set of expanded rows. Front ends only feed it events (parameters changed,
//! scrolled near the bottom, view toggled, row clicked) and hand it the
//! results of network calls.
//!
//! A load is split in two so the same controller works for a synchronous
//! driver (CLI, tests) and a threaded one (GUI):
//!
//! ```text
//! begin_load(reset) ──► Ticket { request } ──► CatalogSource::fetch ──► complete_load(ticket, result)
//!        │ guard fails                                                        │
//!        └──► None (no request)                     LoadOutcome::{Replaced, Appended, Stale, Failed}
//! ```
//!
//! Invariants:
//! - at most one `Ticket` is outstanding (`is_loading`);
//! - `total_available` is written once per reset cycle;
//! - `expanded` only ever holds indices of loaded books;
//! - a ticket issued before a parameter change is never merged (generation check).

use std::collections::BTreeSet;
use std::ops::Range;

use crate::config::consts::{FIRST_PAGE_SIZE, PAGE_SIZE, SCROLL_THRESHOLD_PX};
use crate::core::net::CatalogSource;
use crate::data::{Book, PageRequest, PageResponse};
use crate::error::LoadError;
use crate::params::QueryParameters;
use crate::render::{RenderTarget, ViewMode};

/// `(startIndex, count)` slice of the server's generated sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageWindow {
    pub start_index: u64,
    pub count: u32,
}

impl PageWindow {
    /// Page 0 is 20 items from 0; page n is 10 items from `20 + (n - 1) * 10`.
    pub fn for_page(page: u32) -> Self {
        if page == 0 {
            Self { start_index: 0, count: FIRST_PAGE_SIZE }
        } else {
            let start = u64::from(FIRST_PAGE_SIZE) + u64::from(page - 1) * u64::from(PAGE_SIZE);
            Self { start_index: start, count: PAGE_SIZE }
        }
    }
}

#[derive(Debug, Default)]
pub struct LoadState {
    books: Vec<Book>,
    current_page: u32,
    total_available: Option<u64>,
    is_loading: bool,
    expanded: BTreeSet<u64>,
    exhausted: bool,
}

impl LoadState {
    pub fn books(&self) -> &[Book] { &self.books }
    pub fn current_page(&self) -> u32 { self.current_page }
    /// `None` until the first successful response of a reset cycle.
    pub fn total_available(&self) -> Option<u64> { self.total_available }
    pub fn is_loading(&self) -> bool { self.is_loading }
    pub fn expanded(&self) -> &BTreeSet<u64> { &self.expanded }
    pub fn is_expanded(&self, index: u64) -> bool { self.expanded.contains(&index) }
    /// The server returned a short page; no further incremental loads.
    pub fn exhausted(&self) -> bool { self.exhausted }

    /// Reset everything but the in-flight flag, which tracks a real request.
    fn clear(&mut self) {
        self.books.clear();
        self.current_page = 0;
        self.total_available = None;
        self.expanded.clear();
        self.exhausted = false;
    }

    fn contains(&self, index: u64) -> bool {
        self.books.iter().any(|b| b.index == index)
    }
}

/// Viewport geometry, in the same units for all three fields.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_top: f32,
    pub viewport_height: f32,
    pub content_height: f32,
}

impl ScrollMetrics {
    pub fn near_bottom(&self) -> bool {
        self.scroll_top + self.viewport_height >= self.content_height - SCROLL_THRESHOLD_PX
    }
}

/// Permission to run exactly one request. Hand it back to `complete_load`.
#[derive(Debug)]
#[must_use = "a Ticket holds the loading flag until passed to complete_load"]
pub struct Ticket {
    generation: u64,
    reset: bool,
    page: u32,
    request: PageRequest,
}

impl Ticket {
    pub fn request(&self) -> &PageRequest { &self.request }
    pub fn is_reset(&self) -> bool { self.reset }
    pub fn page(&self) -> u32 { self.page }
}

#[derive(Debug)]
pub enum LoadOutcome {
    /// Reset load: the list now holds exactly this many books.
    Replaced { count: usize },
    /// Incremental load: these positions in `books()` are new.
    Appended { range: Range<usize> },
    /// Issued before a parameter change; dropped without merging.
    Stale,
    /// Transport, status or body failure. State is unchanged.
    Failed(LoadError),
}

impl LoadOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, LoadOutcome::Replaced { .. } | LoadOutcome::Appended { .. })
    }

    /// Books merged by this outcome.
    pub fn added(&self) -> usize {
        match self {
            LoadOutcome::Replaced { count } => *count,
            LoadOutcome::Appended { range } => range.len(),
            _ => 0,
        }
    }
}

pub struct Catalog<R: RenderTarget> {
    query: QueryParameters,
    state: LoadState,
    view: ViewMode,
    generation: u64,
    reset_queued: bool,
    renderer: R,
}

impl<R: RenderTarget> Catalog<R> {
    pub fn new(query: QueryParameters, view: ViewMode, renderer: R) -> Self {
        Self {
            query,
            state: LoadState::default(),
            view,
            generation: 0,
            reset_queued: false,
            renderer,
        }
    }

    pub fn query(&self) -> &QueryParameters { &self.query }
    pub fn state(&self) -> &LoadState { &self.state }
    pub fn books(&self) -> &[Book] { &self.state.books }
    pub fn view_mode(&self) -> ViewMode { self.view }
    pub fn renderer(&self) -> &R { &self.renderer }
    pub fn renderer_mut(&mut self) -> &mut R { &mut self.renderer }
    pub fn has_queued_reset(&self) -> bool { self.reset_queued }

    /// Phase one of a load. `None` means the guard said no and nothing was
    /// started; otherwise `is_loading` stays set until the ticket comes back.
    ///
    /// A reset load clears the list, cursor, total and expansions first, so it
    /// always fetches page 0.
    pub fn begin_load(&mut self, reset: bool) -> Option<Ticket> {
        let s = &self.state;
        if s.is_loading {
            logd!("Load: skipped reset={} (request in flight)", reset);
            return None;
        }
        if !reset {
            // Whole dataset fits in the first page and is already here.
            if let Some(total) = s.total_available {
                if total < u64::from(FIRST_PAGE_SIZE) && s.books.len() as u64 >= total {
                    logd!("Load: skipped (all {} books loaded)", total);
                    return None;
                }
            }
            if s.exhausted {
                logd!("Load: skipped (server returned a short page)");
                return None;
            }
        }

        if reset {
            self.clear_all();
        }

        let s = &self.state;
        let page = s.current_page;
        let window = PageWindow::for_page(page);
        let request = PageRequest::new(&self.query, window.start_index, window.count);

        logf!(
            "Load: begin reset={} page={} start={} count={} books={} total={:?}",
            reset, page, window.start_index, window.count, s.books.len(), s.total_available
        );

        self.state.is_loading = true;
        Some(Ticket { generation: self.generation, reset, page, request })
    }

    /// Phase two. Always releases the in-flight flag.
    pub fn complete_load(&mut self, ticket: Ticket, result: Result<PageResponse, LoadError>) -> LoadOutcome {
        self.state.is_loading = false;

        if ticket.generation != self.generation {
            match &result {
                Ok(p) => logd!("Load: dropped stale page={} books={}", ticket.page, p.books.len()),
                Err(e) => logd!("Load: stale page={} failed: {}", ticket.page, e),
            }
            return LoadOutcome::Stale;
        }

        let response = match result {
            Ok(r) => r,
            Err(e) => {
                loge!("Load: failed page={} reset={}: {}", ticket.page, ticket.reset, e);
                return LoadOutcome::Failed(e);
            }
        };

        let batch: Vec<Book> = response.books.into_iter().map(Book::from).collect();
        let requested = ticket.request.count as usize;

        // Once per reset cycle; only `clear` makes it unknown again.
        if self.state.total_available.is_none() {
            self.state.total_available = Some(response.total_generated);
        }
        self.state.exhausted = batch.len() < requested;

        self.state.current_page += 1;
        let outcome = if ticket.reset {
            let count = batch.len();
            self.state.books = batch;
            self.renderer.replace_all(&self.state.books, self.view);
            LoadOutcome::Replaced { count }
        } else {
            let start = self.state.books.len();
            self.state.books.extend(batch);
            let range = start..self.state.books.len();
            self.renderer.append(&self.state.books[range.clone()], self.view);
            LoadOutcome::Appended { range }
        };

        logf!(
            "Load: OK page={} added={} books={} total={:?} exhausted={}",
            ticket.page,
            outcome.added(),
            self.state.books.len(),
            self.state.total_available,
            self.state.exhausted
        );
        outcome
    }

    /// Run a ticket against a source on the current thread.
    pub fn run_ticket<S: CatalogSource + ?Sized>(&mut self, ticket: Ticket, source: &S) -> LoadOutcome {
        let result = source.fetch(ticket.request());
        self.complete_load(ticket, result)
    }

    /// Synchronous `load(reset)`: one guard check, at most one fetch.
    pub fn load<S: CatalogSource + ?Sized>(&mut self, reset: bool, source: &S) -> Option<LoadOutcome> {
        let ticket = self.begin_load(reset)?;
        Some(self.run_ticket(ticket, source))
    }

    /// Incremental load when the viewport bottom is within the threshold.
    pub fn on_scroll_near_bottom(&mut self, metrics: ScrollMetrics) -> Option<Ticket> {
        if !metrics.near_bottom() {
            return None;
        }
        self.begin_load(false)
    }

    /// New parameters: drop everything and start a reset load.
    ///
    /// If a request is still out, its response will come back `Stale` and the
    /// reset load is queued for `take_queued_reset`.
    pub fn on_parameters_changed(&mut self, query: QueryParameters) -> Option<Ticket> {
        logf!(
            "Params: lang={} region={:?} seed={} likes={} reviews={}",
            query.language, query.region, query.seed, query.average_likes, query.average_reviews
        );
        self.query = query;
        self.generation += 1;

        if self.state.is_loading {
            logd!("Params: reset queued behind in-flight request");
            self.clear_all();
            self.reset_queued = true;
            return None;
        }
        self.reset_queued = false;
        self.begin_load(true)
    }

    /// Empty state and view. The in-flight flag is left alone.
    fn clear_all(&mut self) {
        self.state.clear();
        self.renderer.replace_all(&[], self.view);
    }

    /// The reset load deferred by `on_parameters_changed`, once the flag is free.
    pub fn take_queued_reset(&mut self) -> Option<Ticket> {
        if !self.reset_queued || self.state.is_loading {
            return None;
        }
        self.reset_queued = false;
        self.begin_load(true)
    }

    /// Re-render the current list in another mode. Never fetches.
    pub fn set_view_mode(&mut self, mode: ViewMode) {
        logd!("View: {:?} -> {:?} ({} books)", self.view, mode, self.state.books.len());
        self.view = mode;
        self.renderer.replace_all(&self.state.books, mode);
    }

    /// Flip a row's detail view. `None` if no loaded book has that index.
    pub fn toggle_expanded(&mut self, index: u64) -> Option<bool> {
        if !self.state.contains(index) {
            return None;
        }
        let expanded = if self.state.expanded.remove(&index) {
            false
        } else {
            self.state.expanded.insert(index);
            true
        };
        self.renderer.set_expanded(index, expanded);
        Some(expanded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn windows_follow_first_page_then_tens() {
        assert_eq!(PageWindow::for_page(0), PageWindow { start_index: 0, count: 20 });
        assert_eq!(PageWindow::for_page(1), PageWindow { start_index: 20, count: 10 });
        assert_eq!(PageWindow::for_page(2), PageWindow { start_index: 30, count: 10 });
        assert_eq!(PageWindow::for_page(5), PageWindow { start_index: 60, count: 10 });
    }

    #[test]
    fn near_bottom_uses_twenty_px_threshold() {
        let at = |top: f32| ScrollMetrics { scroll_top: top, viewport_height: 600.0, content_height: 1000.0 };
        assert!(!at(379.0).near_bottom());
        assert!(at(380.0).near_bottom());
        assert!(at(400.0).near_bottom());
    }
}
