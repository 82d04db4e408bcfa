// src/gui/view_model.rs
//! ViewModel: what the egui widgets draw from.
//!
//! The controller pushes books in through `RenderTarget`; this type keeps the
//! display-ready strings and colors so the per-frame draw code does no
//! formatting. `replace_all` rebuilds from scratch, `append` only extends,
//! mirroring the full/incremental render contract.

use std::collections::BTreeSet;

use eframe::egui::Color32;

use crate::{
    data::{Book, Review},
    render::{RenderTarget, ViewMode},
};

#[derive(Clone, Debug)]
pub struct BookRow {
    pub index: u64,
    pub isbn: String,
    pub title: String,
    pub authors: String,
    pub publisher: String,
    pub likes: String,
    pub reviews: Vec<Review>,
    pub cover_from: Color32,
    pub cover_to: Color32,
    pub cover_mid: Color32,
}

impl From<&Book> for BookRow {
    fn from(b: &Book) -> Self {
        let [r0, g0, b0] = b.cover.from;
        let [r1, g1, b1] = b.cover.to;
        let [r2, g2, b2] = b.cover.mid();
        Self {
            index: b.index,
            isbn: b.isbn.clone(),
            title: b.title.clone(),
            authors: b.authors_display.clone(),
            publisher: b.publisher.clone(),
            likes: b.likes.to_string(),
            reviews: b.reviews.clone(),
            cover_from: Color32::from_rgb(r0, g0, b0),
            cover_to: Color32::from_rgb(r1, g1, b1),
            cover_mid: Color32::from_rgb(r2, g2, b2),
        }
    }
}

#[derive(Debug, Default)]
pub struct ViewModel {
    mode: ViewMode,
    rows: Vec<BookRow>,
    expanded: BTreeSet<u64>,
    scroll_to_top: bool,
}

impl ViewModel {
    pub fn mode(&self) -> ViewMode { self.mode }
    pub fn rows(&self) -> &[BookRow] { &self.rows }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }
    pub fn is_expanded(&self, index: u64) -> bool { self.expanded.contains(&index) }

    /// True once after each full re-render; the scroll area jumps back up.
    pub fn take_scroll_reset(&mut self) -> bool {
        std::mem::take(&mut self.scroll_to_top)
    }
}

impl RenderTarget for ViewModel {
    fn replace_all(&mut self, books: &[Book], mode: ViewMode) {
        let mode_changed = self.mode != mode;
        self.mode = mode;
        self.rows = books.iter().map(BookRow::from).collect();
        self.expanded.retain(|ix| books.iter().any(|b| b.index == *ix));
        // A view toggle keeps the reader's place; a new dataset starts at the top.
        self.scroll_to_top = !mode_changed;
    }

    fn append(&mut self, batch: &[Book], mode: ViewMode) {
        self.mode = mode;
        self.rows.extend(batch.iter().map(BookRow::from));
    }

    fn set_expanded(&mut self, index: u64, expanded: bool) {
        if expanded {
            self.expanded.insert(index);
        } else {
            self.expanded.remove(&index);
        }
    }
}
