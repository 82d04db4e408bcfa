// src/progress.rs
/// Lightweight progress reporting for multi-page loads.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of pages wanted.
    fn begin(&mut self, _pages: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One page merged; `books` is the list length afterwards.
    fn item_done(&mut self, _page: u32, _books: usize) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Status lines on stderr, so stdout stays clean for the rendered catalog.
#[derive(Default)]
pub struct CliProgress {
    pages: usize,
    done: usize,
}

impl Progress for CliProgress {
    fn begin(&mut self, pages: usize) {
        self.pages = pages;
        self.done = 0;
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn item_done(&mut self, page: u32, books: usize) {
        self.done += 1;
        eprintln!("Loaded page {} ({}/{}), {} books", page, self.done, self.pages, books);
    }
    fn finish(&mut self) {
        eprintln!("Done ({}/{} pages)", self.done, self.pages);
    }
}
