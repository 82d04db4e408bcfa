// src/gui/components/notice.rs
use eframe::egui;

use crate::gui::app::App;

/// Modal-ish notice window; blocks nothing else but must be dismissed.
pub fn draw(ctx: &egui::Context, app: &mut App) {
    let Some(msg) = app.notice.clone() else { return };

    let mut dismissed = false;
    egui::Window::new("Notice")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .show(ctx, |ui| {
            ui.label(msg);
            ui.add_space(6.0);
            if ui.button("OK").clicked() {
                dismissed = true;
            }
        });

    if dismissed {
        app.notice = None;
    }
}
