// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod error;
pub mod params;
pub mod data;
pub mod render;
pub mod controller;
pub mod progress;
pub mod runner;
pub mod csv;
pub mod file;
pub mod gui;

#[cfg(feature = "cli")]
pub mod cli;

pub use controller::{Catalog, LoadOutcome, LoadState, PageWindow, ScrollMetrics, Ticket};
pub use data::{Book, PageRequest, PageResponse, Review, WireBook};
pub use error::{ExportError, LoadError};
pub use params::QueryParameters;
pub use render::{RenderTarget, ViewMode};
