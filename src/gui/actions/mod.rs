// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::export.

mod export;  // src/gui/actions/export.rs

pub use export::export;
