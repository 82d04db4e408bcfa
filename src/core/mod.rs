// src/core/mod.rs

pub mod cover;
pub mod net;
pub mod parse;

pub use cover::{CoverColor, cover_for};
pub use net::{CatalogSource, HttpSource};
