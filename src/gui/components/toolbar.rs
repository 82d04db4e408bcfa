// src/gui/components/toolbar.rs

use eframe::egui::{self, widgets::Spinner};

use crate::{gui::{actions, app::App}, render::ViewMode};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        // --- View toggle ---
        let prev = app.catalog.view_mode();
        let mut mode = prev;
        ui.label("View:");
        ui.selectable_value(&mut mode, ViewMode::Table, ViewMode::Table.label());
        ui.selectable_value(&mut mode, ViewMode::Gallery, ViewMode::Gallery.label());
        if mode != prev {
            app.state.options.view = mode;
            app.catalog.set_view_mode(mode);
            logf!("UI: View → {:?}", mode);
        }

        ui.separator();

        // --- Export ---
        ui.label("Export to:");
        let edit = egui::TextEdit::singleline(&mut app.state.gui.out_dir_text)
            .desired_width(180.0)
            .font(egui::TextStyle::Monospace);
        if ui.add(edit).changed() {
            app.state.gui.out_dir_dirty = true;
        }
        if ui.button("Export CSV").clicked() {
            actions::export(app);
        }

        ui.separator();

        // --- Status ---
        if app.is_loading() {
            ui.add(Spinner::new());
        } else if !app.last_load_ok && ui.button("Retry").clicked() {
            app.retry(ui.ctx());
        }
        let st = app.catalog.state();
        let total = st.total_available().map(|t| t.to_string()).unwrap_or_else(|| s!("?"));
        ui.label(format!("{} books (server total {})", st.books().len(), total));
        ui.label(format!("Status: {}", app.status_text()));
    });
}
