// src/gui/components/gallery.rs
//
// Card gallery, three per row. Every card shows its reviews inline, so there
// is no expansion state here.

use eframe::egui::{self, vec2};

use super::cover;
use crate::gui::view_model::{BookRow, ViewModel};

const PER_ROW: usize = 3;

pub fn draw(ui: &mut egui::Ui, vm: &ViewModel) {
    for chunk in vm.rows().chunks(PER_ROW) {
        ui.columns(PER_ROW, |cols| {
            for (col, r) in cols.iter_mut().zip(chunk) {
                card(col, r);
            }
        });
        ui.add_space(8.0);
    }
}

fn card(ui: &mut egui::Ui, r: &BookRow) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal_top(|ui| {
            cover::paint(ui, vec2(90.0, 130.0), r, true);
            ui.vertical(|ui| {
                ui.strong(&r.title);
                ui.weak(&r.authors);
                ui.small(&r.publisher);
                ui.label(format!("ISBN: {}", r.isbn));
                ui.horizontal(|ui| {
                    ui.label(format!("♥ {}", r.likes));
                    ui.weak(format!("{} reviews", r.reviews.len()));
                });
            });
        });

        if !r.reviews.is_empty() {
            ui.separator();
            ui.strong("Reviews:");
            for review in &r.reviews {
                ui.label(format!("\"{}\"", review.text));
                ui.weak(format!("- {}", review.author));
            }
        }
    });
}
