// src/gui/loader.rs
//
// Runs one fetch at a time off the UI thread. The controller's ticket travels
// to the worker and back, so the in-flight flag and generation check stay with
// the controller; this type only moves bytes.

use std::{
    sync::{Arc, Mutex, mpsc},
    thread,
};

use eframe::egui;

use crate::{
    controller::Ticket,
    core::net::CatalogSource,
    data::PageResponse,
    error::LoadError,
};

pub type Finished = (Ticket, Result<PageResponse, LoadError>);

pub struct Loader {
    source: Arc<dyn CatalogSource>,
    tx: mpsc::Sender<Finished>,
    rx: mpsc::Receiver<Finished>,
}

impl Loader {
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        let (tx, rx) = mpsc::channel();
        Self { source, tx, rx }
    }

    /// Fetch on a worker thread; wakes the UI when the answer is in.
    pub fn spawn(&mut self, ticket: Ticket, status: Arc<Mutex<String>>, ctx: &egui::Context) {
        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();
        let ctx = ctx.clone();

        if let Ok(mut s) = status.lock() {
            let r = ticket.request();
            *s = format!("Loading books {}..{}", r.start_index, r.start_index + u64::from(r.count));
        }

        thread::spawn(move || {
            let result = source.fetch(ticket.request());
            // Receiver gone means the window closed; nothing left to update.
            let _ = tx.send((ticket, result));
            ctx.request_repaint();
        });
    }

    /// Completed fetch, if any. Non-blocking.
    pub fn poll(&mut self) -> Option<Finished> {
        self.rx.try_recv().ok()
    }
}
