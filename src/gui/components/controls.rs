// src/gui/components/controls.rs
//
// Left panel: the query form. Returns true when any parameter changed, which
// the caller turns into a full reset + reload.

use eframe::egui;

use crate::{
    config::consts::{LOCALES, MAX_AVG_LIKES},
    gui::app::App,
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) -> bool {
    let q = &mut app.state.options.query;
    let mut changed = false;

    ui.heading("Catalog");
    ui.add_space(6.0);

    // --- Language / region ---
    ui.label("Language & region");
    let selected_label = LOCALES
        .iter()
        .find(|(v, _)| *v == q.locale)
        .map(|(_, l)| *l)
        .unwrap_or(q.locale.as_str());
    egui::ComboBox::from_id_salt("locale")
        .selected_text(selected_label)
        .width(200.0)
        .show_ui(ui, |ui| {
            for (value, label) in LOCALES {
                if ui.selectable_label(q.locale == *value, *label).clicked() && q.locale != *value {
                    q.locale = s!(*value);
                    changed = true;
                }
            }
        });
    ui.add_space(8.0);

    // --- Seed ---
    ui.label("Seed");
    ui.horizontal(|ui| {
        let edit = egui::TextEdit::singleline(&mut q.seed_text)
            .desired_width(120.0)
            .font(egui::TextStyle::Monospace);
        if ui.add(edit).changed() {
            changed = true;
        }
        if ui.button("Random").on_hover_text("Pick a random seed").clicked() {
            let seed = q.randomize_seed(&mut rand::thread_rng());
            logd!("UI: Random seed → {}", seed);
            changed = true;
        }
    });
    ui.add_space(8.0);

    // --- Average likes (slider, one decimal) ---
    ui.label("Average likes");
    let slider = egui::Slider::new(&mut q.avg_likes, 0.0..=MAX_AVG_LIKES)
        .step_by(0.1)
        .fixed_decimals(1);
    if ui.add(slider).changed() {
        changed = true;
    }
    ui.add_space(8.0);

    // --- Average reviews ---
    ui.label("Average reviews");
    let edit = egui::TextEdit::singleline(&mut q.reviews_text).desired_width(120.0);
    if ui.add(edit).changed() {
        changed = true;
    }

    if changed {
        logf!(
            "UI: Params locale={} seed='{}' likes={:.1} reviews='{}'",
            q.locale, q.seed_text, q.avg_likes, q.reviews_text
        );
    }
    changed
}
