// src/gui/components/catalog_view.rs
//
// Central panel: one vertical scroll area around the active view. Scroll
// position is turned into ScrollMetrics for the controller's infinite-scroll
// trigger.

use eframe::egui;

use super::{data_table, gallery};
use crate::{controller::ScrollMetrics, gui::app::App, render::ViewMode};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let mut area = egui::ScrollArea::vertical()
        .id_salt("catalog_scroll")
        .auto_shrink([false, false]);
    if app.catalog.renderer_mut().take_scroll_reset() {
        area = area.vertical_scroll_offset(0.0);
    }

    let mut clicked: Option<u64> = None;
    let loading = app.is_loading();
    let output = area.show(ui, |ui| {
        let vm = app.catalog.renderer();
        if vm.is_empty() {
            ui.weak(if loading { "Loading…" } else { "No books loaded." });
            return;
        }
        match vm.mode() {
            ViewMode::Table => clicked = data_table::draw(ui, vm),
            ViewMode::Gallery => gallery::draw(ui, vm),
        }
    });

    if let Some(index) = clicked {
        if let Some(expanded) = app.catalog.toggle_expanded(index) {
            logd!("UI: Row {} expanded={}", index, expanded);
        }
    }

    let metrics = ScrollMetrics {
        scroll_top: output.state.offset.y,
        viewport_height: output.inner_rect.height(),
        content_height: output.content_size.y,
    };

    // Only user scrolling fires a load, except while the list is too short to
    // scroll at all; then keep filling as long as loads succeed.
    let moved = (metrics.scroll_top - app.last_scroll_y).abs() > 0.5;
    let wheel = ui.input(|i| i.smooth_scroll_delta.y != 0.0);
    let fits = metrics.content_height <= metrics.viewport_height;
    app.last_scroll_y = metrics.scroll_top;

    if moved || wheel || (fits && app.last_load_ok) {
        if let Some(ticket) = app.catalog.on_scroll_near_bottom(metrics) {
            app.dispatch(ticket, ui.ctx());
        }
    }
}
