// src/gui/components/mod.rs
pub mod catalog_view;
pub mod controls;
pub mod cover;
pub mod data_table;
pub mod gallery;
pub mod notice;
pub mod toolbar;
