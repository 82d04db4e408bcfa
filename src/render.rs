// src/render.rs
//
// Render surface contract + the plain-text renderer the CLI prints from.
// The GUI's implementation lives in gui::view_model.

use std::collections::BTreeSet;
use std::fmt::Write as _;

use crate::data::Book;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ViewMode {
    #[default]
    Table,
    Gallery,
}

impl ViewMode {
    pub fn label(self) -> &'static str {
        match self {
            ViewMode::Table => "Table",
            ViewMode::Gallery => "Gallery",
        }
    }
}

/// Anything that can show the loaded books.
///
/// `replace_all` must be idempotent (same input, same picture); `append` only
/// ever adds the given batch after what is already shown.
pub trait RenderTarget {
    fn replace_all(&mut self, books: &[Book], mode: ViewMode);
    fn append(&mut self, batch: &[Book], mode: ViewMode);
    fn set_expanded(&mut self, index: u64, expanded: bool);
}

/// Discards everything. For headless drivers that only want the data.
#[derive(Debug, Default)]
pub struct NullRenderer;

impl RenderTarget for NullRenderer {
    fn replace_all(&mut self, _books: &[Book], _mode: ViewMode) {}
    fn append(&mut self, _batch: &[Book], _mode: ViewMode) {}
    fn set_expanded(&mut self, _index: u64, _expanded: bool) {}
}

/// Keeps what it was told to show and turns it into text on demand.
#[derive(Debug, Default)]
pub struct TextRenderer {
    mode: ViewMode,
    books: Vec<Book>,
    expanded: BTreeSet<u64>,
}

// Column widths; keep in sync with the format strings in render_table.
const W_ISBN: usize = 17;
const W_TITLE: usize = 34;
const W_AUTHORS: usize = 28;
const W_PUBLISHER: usize = 24;

impl TextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn render(&self) -> String {
        match self.mode {
            ViewMode::Table => self.render_table(),
            ViewMode::Gallery => self.render_gallery(),
        }
    }

    fn render_table(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{:>5}  {:<17}  {:<34}  {:<28}  {:<24}  Likes",
            "#", "ISBN", "Title", "Author(s)", "Publisher"
        );
        for b in &self.books {
            let _ = writeln!(
                out,
                "{:>5}  {:<17}  {:<34}  {:<28}  {:<24}  {}",
                b.index,
                fit(&b.isbn, W_ISBN),
                fit(&b.title, W_TITLE),
                fit(&b.authors_display, W_AUTHORS),
                fit(&b.publisher, W_PUBLISHER),
                b.likes
            );
            if self.expanded.contains(&b.index) {
                let pad = " ".repeat(7);
                let _ = writeln!(out, "{pad}{} (Paperback) by {}", b.title, b.authors_display);
                let _ = writeln!(out, "{pad}Publisher: {}  ISBN: {}", b.publisher, b.isbn);
                write_reviews(&mut out, &pad, b);
            }
        }
        out
    }

    fn render_gallery(&self) -> String {
        let mut out = String::new();
        for b in &self.books {
            let _ = writeln!(out, "+-- #{} {}", b.index, b.title);
            let _ = writeln!(out, "|   by {}", b.authors_display);
            let _ = writeln!(out, "|   {}", b.publisher);
            let _ = writeln!(out, "|   ISBN: {}", b.isbn);
            let _ = writeln!(out, "|   Likes: {}   {} reviews", b.likes, b.reviews.len());
            if !b.reviews.is_empty() {
                let _ = writeln!(out, "|   Reviews:");
                for r in &b.reviews {
                    let _ = writeln!(out, "|     \"{}\" - {}", r.text, r.author);
                }
            }
            let _ = writeln!(out, "+--");
        }
        out
    }
}

fn write_reviews(out: &mut String, pad: &str, b: &Book) {
    if b.reviews.is_empty() {
        let _ = writeln!(out, "{pad}No reviews yet.");
        return;
    }
    let _ = writeln!(out, "{pad}Reviews:");
    for r in &b.reviews {
        let _ = writeln!(out, "{pad}  \"{}\" - {}", r.text, r.author);
    }
}

/// Truncate to `width` chars, marking the cut with '~'.
fn fit(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        return s!(s);
    }
    let mut t: String = s.chars().take(width.saturating_sub(1)).collect();
    t.push('~');
    t
}

impl RenderTarget for TextRenderer {
    fn replace_all(&mut self, books: &[Book], mode: ViewMode) {
        self.mode = mode;
        self.books = books.to_vec();
        self.expanded.retain(|ix| books.iter().any(|b| b.index == *ix));
    }

    fn append(&mut self, batch: &[Book], mode: ViewMode) {
        self.mode = mode;
        self.books.extend_from_slice(batch);
    }

    fn set_expanded(&mut self, index: u64, expanded: bool) {
        if expanded {
            self.expanded.insert(index);
        } else {
            self.expanded.remove(&index);
        }
    }
}
