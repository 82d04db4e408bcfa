// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex},
};

use eframe::egui;

use crate::{
    config::state::AppState,
    controller::{Catalog, LoadOutcome, Ticket},
    core::net::{CatalogSource, HttpSource},
    progress::Progress,
};

use super::{loader::Loader, progress::GuiProgress, view_model::ViewModel};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    let mut state = AppState::default();
    state.options.net = crate::config::options::NetOptions::from_env();
    let source = HttpSource::new(&state.options.net)?;
    logf!("Init: api={}", source.url());

    eframe::run_native(
        "Book Catalog",
        options,
        Box::new(move |cc| Ok(Box::new(App::new(state, Arc::new(source), &cc.egui_ctx)))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,
    pub catalog: Catalog<ViewModel>,
    pub loader: Loader,

    // status line; `Loader::spawn` sets "Loading books…" on the UI thread, `pump` the result
    pub status: Arc<Mutex<String>>,

    /// Blocking notice, e.g. "No data to export."
    pub notice: Option<String>,

    /// Last settled load succeeded; gates scroll-triggered loads when the list
    /// is too short to scroll, so a failure does not refire every frame.
    pub last_load_ok: bool,
    pub last_scroll_y: f32,
}

impl App {
    pub fn new(state: AppState, source: Arc<dyn CatalogSource>, ctx: &egui::Context) -> Self {
        let query = state.options.query.to_params();
        let view = state.options.view;

        let mut app = Self {
            state,
            catalog: Catalog::new(query, view, ViewModel::default()),
            loader: Loader::new(source),
            status: Arc::new(Mutex::new(s!("Idle"))),
            notice: None,
            last_load_ok: true,
            last_scroll_y: 0.0,
        };

        // Startup load.
        if let Some(ticket) = app.catalog.begin_load(true) {
            app.dispatch(ticket, ctx);
        }
        app
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    pub fn is_loading(&self) -> bool {
        self.catalog.state().is_loading()
    }

    /// Hand a ticket to the worker thread.
    pub fn dispatch(&mut self, ticket: Ticket, ctx: &egui::Context) {
        self.loader.spawn(ticket, self.status.clone(), ctx);
    }

    /// Merge any finished fetch, then start a queued reset if one is waiting.
    fn pump(&mut self, ctx: &egui::Context) {
        while let Some((ticket, result)) = self.loader.poll() {
            let page = ticket.page();
            let mut prog = GuiProgress::new(self.status.clone());

            match self.catalog.complete_load(ticket, result) {
                LoadOutcome::Failed(e) => {
                    self.last_load_ok = false;
                    prog.log(&format!("Load failed: {e}"));
                }
                LoadOutcome::Stale => {
                    prog.log("Parameters changed, reloading");
                }
                ok => {
                    self.last_load_ok = true;
                    prog.item_done(page, self.catalog.books().len());
                    if ok.added() == 0 || self.catalog.state().exhausted() {
                        prog.log(&format!("All {} books loaded", self.catalog.books().len()));
                    }
                }
            }
        }

        if let Some(ticket) = self.catalog.take_queued_reset() {
            self.dispatch(ticket, ctx);
        }
    }

    /// Form inputs changed: full reset + reload.
    pub fn parameters_changed(&mut self, ctx: &egui::Context) {
        let query = self.state.options.query.to_params();
        self.last_load_ok = true;
        if let Some(ticket) = self.catalog.on_parameters_changed(query) {
            self.dispatch(ticket, ctx);
        } else if self.catalog.has_queued_reset() {
            self.status("Waiting for previous request");
        }
    }

    /// Manual retry after a failed load.
    pub fn retry(&mut self, ctx: &egui::Context) {
        let reset = self.catalog.books().is_empty();
        logf!("UI: Retry reset={}", reset);
        if let Some(ticket) = self.catalog.begin_load(reset) {
            self.last_load_ok = true;
            self.dispatch(ticket, ctx);
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.pump(ctx);

        egui::SidePanel::left("query")
            .resizable(false)
            .min_width(220.0)
            .show(ctx, |ui| {
                if super::components::controls::draw(ui, self) {
                    self.parameters_changed(ctx);
                }
            });

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            super::components::toolbar::draw(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            super::components::catalog_view::draw(ui, self);
        });

        super::components::notice::draw(ctx, self);
    }
}
