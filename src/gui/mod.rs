// src/gui/mod.rs
pub mod actions;
pub mod app;
pub mod components;
pub mod loader;
pub mod progress;
pub mod view_model;

pub use app::run;
