// src/error.rs
use thiserror::Error;

/// Why a page load failed. The controller collapses all of these into a single
/// "load failed" outcome; the variants exist for the log line.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API error: {status} {reason}")]
    Status { status: u16, reason: String },

    #[error("malformed response: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("No data to export.")]
    NoData,

    #[error("export I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
