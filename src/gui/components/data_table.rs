// src/gui/components/data_table.rs
//
// Table view. Purely a view over the ViewModel; a clicked row index is
// returned so the caller can route it through the controller.

use eframe::egui::{self, Align, Label, Layout, RichText, Sense, vec2};
use egui_extras::{Column, TableBuilder};

use super::cover;
use crate::gui::view_model::{BookRow, ViewModel};

const HEADERS: [&str; 6] = ["#", "ISBN", "Title", "Author(s)", "Publisher", "Likes"];
const ROW_H: f32 = 24.0;

fn detail_height(row: &BookRow) -> f32 {
    let reviews = if row.reviews.is_empty() { 1 } else { row.reviews.len() * 2 + 1 };
    (reviews as f32 * 18.0 + 16.0).max(80.0)
}

pub fn draw(ui: &mut egui::Ui, vm: &ViewModel) -> Option<u64> {
    let mut clicked = None;

    TableBuilder::new(ui)
        .striped(true)
        .vscroll(false)
        .sense(Sense::click())
        .cell_layout(Layout::left_to_right(Align::Center))
        .column(Column::exact(56.0))
        .column(Column::initial(150.0).resizable(true).clip(true))
        .column(Column::initial(260.0).resizable(true).clip(true))
        .column(Column::initial(220.0).resizable(true).clip(true))
        .column(Column::initial(170.0).resizable(true).clip(true))
        .column(Column::remainder().at_least(60.0))
        .header(ROW_H, |mut header| {
            for h in HEADERS {
                header.col(|ui| {
                    ui.add(Label::new(RichText::new(h).strong()).selectable(false));
                });
            }
        })
        .body(|mut body| {
            for r in vm.rows() {
                let expanded = vm.is_expanded(r.index);

                body.row(ROW_H, |mut row| {
                    row.set_selected(expanded);
                    row.col(|ui| { ui.label(r.index.to_string()); });
                    row.col(|ui| { ui.label(&r.isbn); });
                    row.col(|ui| { ui.label(&r.title); });
                    row.col(|ui| { ui.label(&r.authors); });
                    row.col(|ui| { ui.label(&r.publisher); });
                    row.col(|ui| { ui.label(format!("♥ {}", r.likes)); });
                    if row.response().clicked() {
                        clicked = Some(r.index);
                    }
                });

                if expanded {
                    body.row(detail_height(r), |mut row| {
                        row.col(|ui| {
                            cover::paint(ui, vec2(44.0, 62.0), r, false);
                        });
                        row.col(|ui| {
                            ui.vertical(|ui| {
                                ui.label(format!("ISBN: {}", r.isbn));
                                ui.label(format!("Publisher: {}", r.publisher));
                                ui.label(format!("♥ {}", r.likes));
                            });
                        });
                        row.col(|ui| {
                            ui.vertical(|ui| {
                                ui.strong(&r.title);
                                ui.weak("Paperback");
                                ui.label(format!("by {}", r.authors));
                            });
                        });
                        row.col(|ui| {
                            ui.vertical(|ui| {
                                if r.reviews.is_empty() {
                                    ui.weak("No reviews yet.");
                                }
                                for review in &r.reviews {
                                    ui.add(Label::new(format!("\"{}\"", review.text)).wrap());
                                    ui.weak(format!("- {}", review.author));
                                }
                            });
                        });
                        row.col(|_ui| {});
                        row.col(|_ui| {});
                    });
                }
            }
        });

    clicked
}
