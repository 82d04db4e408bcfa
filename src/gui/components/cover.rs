// src/gui/components/cover.rs
//
// Gradient book cover. egui has no gradient fill, so this paints a
// vertex-colored quad: top-left `from`, bottom-right `to`, the other two
// corners at the midpoint, which reads as the same 135° diagonal.

use eframe::egui::{self, Color32, FontId, Mesh, Sense, Shape, Vec2, vec2};

use crate::gui::view_model::BookRow;

pub fn paint(ui: &mut egui::Ui, size: Vec2, row: &BookRow, with_text: bool) -> egui::Response {
    let (rect, resp) = ui.allocate_exact_size(size, Sense::hover());
    if !ui.is_rect_visible(rect) {
        return resp;
    }

    let corner = row.cover_mid;
    let mut mesh = Mesh::default();
    mesh.colored_vertex(rect.left_top(), row.cover_from);
    mesh.colored_vertex(rect.right_top(), corner);
    mesh.colored_vertex(rect.right_bottom(), row.cover_to);
    mesh.colored_vertex(rect.left_bottom(), corner);
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(0, 2, 3);

    let painter = ui.painter_at(rect);
    painter.add(Shape::mesh(mesh));

    if with_text {
        let wrap = (rect.width() - 10.0).max(10.0);
        let title = painter.layout(row.title.clone(), FontId::proportional(12.0), Color32::WHITE, wrap);
        let title_h = title.size().y;
        painter.galley(rect.left_top() + vec2(5.0, 6.0), title, Color32::WHITE);

        let by = painter.layout(
            format!("by {}", row.authors),
            FontId::proportional(10.0),
            Color32::from_white_alpha(220),
            wrap,
        );
        painter.galley(rect.left_top() + vec2(5.0, 10.0 + title_h), by, Color32::WHITE);
    }
    resp
}
