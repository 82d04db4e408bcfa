// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use catalog_viewer::{config::state::GuiState, gui, log};
use eframe::egui::{IconData, ViewportBuilder};

fn app_icon() -> Option<IconData> {
    let rgba = image::load_from_memory(include_bytes!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/assets/catalog.png"
    )))
    .ok()?
    .to_rgba8();
    let (w, h) = rgba.dimensions();
    Some(IconData { rgba: rgba.into_raw(), width: w, height: h })
}

fn main() {
    if let Err(e) = log::init() {
        eprintln!("Logging disabled: {}", e);
    }

    let gui_state = GuiState::default();
    let mut viewport = ViewportBuilder::default()
        .with_inner_size([gui_state.window_w as f32, gui_state.window_h as f32]);
    // eframe 0.32: icon set via viewport builder
    if let Some(icon) = app_icon() {
        viewport = viewport.with_icon(icon);
    }

    let options = eframe::NativeOptions { viewport, ..Default::default() };

    if let Err(e) = gui::run(options) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
