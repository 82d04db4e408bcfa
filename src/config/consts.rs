// src/config/consts.rs

// Net config
pub const API_URL: &str = "https://bookstoretestingpro.runasp.net/api/Books/generate";
pub const API_URL_ENV: &str = "CATALOG_API_URL";
pub const REQUEST_TIMEOUT_SECS: u64 = 30;
pub const USER_AGENT: &str = concat!("catalog_viewer/", env!("CARGO_PKG_VERSION"));

// Paging
pub const FIRST_PAGE_SIZE: u32 = 20;
pub const PAGE_SIZE: u32 = 10;
pub const SCROLL_THRESHOLD_PX: f32 = 20.0;

// Query defaults
pub const DEFAULT_LOCALE: &str = "en-US";
pub const DEFAULT_SEED: &str = "42";
pub const DEFAULT_AVG_LIKES: f64 = 5.0;
pub const DEFAULT_AVG_REVIEWS: &str = "2";
pub const MAX_AVG_LIKES: f64 = 10.0;
pub const RANDOM_SEED_MAX: u32 = 1_000_000;

/// (selector value, label)
pub const LOCALES: &[(&str, &str)] = &[
    ("en-US", "English (USA)"),
    ("de-DE", "German (Germany)"),
    ("fr-FR", "French (France)"),
    ("ja-JP", "Japanese (Japan)"),
];

// Local files
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";
pub const LOG_ENV: &str = "CATALOG_LOG";
/// Used when `CATALOG_LOG` is unset or invalid; dependencies stay quiet.
pub const LOG_DEFAULT_FILTER: &str = "catalog_viewer=debug";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const EXPORT_STEM: &str = "bookstore_data";
pub const CSV_BOM: &str = "\u{FEFF}";
pub const CSV_HEADERS: [&str; 8] = [
    "Index", "ISBN", "Title", "Authors", "Publisher", "Likes", "Reviews Count", "Review Texts",
];
