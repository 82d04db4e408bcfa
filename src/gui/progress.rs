// src/gui/progress.rs
use std::sync::{Arc, Mutex};
use crate::progress::Progress;

pub struct GuiProgress {
    status: Arc<Mutex<String>>,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>) -> Self {
        Self { status }
    }
    fn set_status(&self, msg: impl Into<String>) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }
}

impl Progress for GuiProgress {
    fn log(&mut self, msg: &str) {
        self.set_status(msg);
    }
    fn item_done(&mut self, page: u32, books: usize) {
        self.set_status(format!("Loaded page {} ({} books)", page + 1, books));
    }
    fn finish(&mut self) {
        self.set_status("Ready");
    }
}
