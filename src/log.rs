// src/log.rs
//
// Diagnostic channel. Everything funnels through `tracing`; `init` points the
// subscriber at `.store/debug.log`. Without `init` the macros are no-ops,
// which is what the tests rely on.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};

use tracing_subscriber::{EnvFilter, fmt::time::Uptime};

use crate::config::consts::{LOG_DEFAULT_FILTER, LOG_ENV, LOG_FILE, STORE_DIR};

static LOG_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Install the file subscriber. Repeated calls return the first path.
pub fn init() -> io::Result<PathBuf> {
    if let Some(p) = LOG_PATH.get() {
        return Ok(p.clone());
    }

    fs::create_dir_all(STORE_DIR)?;
    let path = PathBuf::from(STORE_DIR).join(LOG_FILE);
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(LOG_DEFAULT_FILTER));

    // Another subscriber may already be set (tests, embedding); keep theirs.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(Uptime::default())
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .try_init();

    Ok(LOG_PATH.get_or_init(|| path).clone())
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        ::tracing::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        ::tracing::debug!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        ::tracing::error!($($arg)*)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_targets_this_crate() {
        assert!(EnvFilter::try_new(LOG_DEFAULT_FILTER).is_ok());
        let (target, level) = LOG_DEFAULT_FILTER.split_once('=').unwrap();
        assert_eq!(target, env!("CARGO_CRATE_NAME"));
        assert_eq!(level, "debug");
    }
}
