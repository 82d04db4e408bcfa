// src/config/options.rs
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::NaiveDate;
use rand::Rng;

use super::consts::*;
use crate::params::QueryParameters;
use crate::render::ViewMode;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppOptions {
    pub query: QueryOptions,
    pub export: ExportOptions,
    pub net: NetOptions,
    pub view: ViewMode,
}

/// Raw form inputs, kept as typed by the user. Parsing is lenient and happens
/// in `to_params`, so a half-typed seed never blocks the UI.
#[derive(Clone, Debug, PartialEq)]
pub struct QueryOptions {
    pub locale: String,
    pub seed_text: String,
    pub avg_likes: f64,
    pub reviews_text: String,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            locale: s!(DEFAULT_LOCALE),
            seed_text: s!(DEFAULT_SEED),
            avg_likes: DEFAULT_AVG_LIKES,
            reviews_text: s!(DEFAULT_AVG_REVIEWS),
        }
    }
}

impl QueryOptions {
    pub fn to_params(&self) -> QueryParameters {
        QueryParameters::from_inputs(&self.locale, &self.seed_text, self.avg_likes, &self.reviews_text)
    }

    /// Replace the seed text with a fresh value in `0..RANDOM_SEED_MAX`.
    pub fn randomize_seed<R: Rng + ?Sized>(&mut self, rng: &mut R) -> u32 {
        let seed = rng.gen_range(0..RANDOM_SEED_MAX);
        self.seed_text = seed.to_string();
        seed
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    out_dir: PathBuf,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self { out_dir: PathBuf::from(DEFAULT_OUT_DIR) }
    }
}

impl ExportOptions {
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Parse GUI/CLI text into a directory. Blank text falls back to the default.
    pub fn set_dir(&mut self, text: &str) {
        let t = text.trim();
        self.out_dir = if t.is_empty() { PathBuf::from(DEFAULT_OUT_DIR) } else { PathBuf::from(t) };
    }

    /// `bookstore_data_<YYYY-MM-DD>.csv`
    pub fn file_name_for(date: NaiveDate) -> String {
        format!("{}_{}.csv", EXPORT_STEM, date.format("%Y-%m-%d"))
    }

    pub fn out_path_for(&self, date: NaiveDate) -> PathBuf {
        self.out_dir.join(Self::file_name_for(date))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NetOptions {
    pub api_url: String,
    pub timeout: Duration,
}

impl Default for NetOptions {
    fn default() -> Self {
        Self {
            api_url: s!(API_URL),
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
        }
    }
}

impl NetOptions {
    /// Defaults, with `CATALOG_API_URL` taking precedence over the built-in endpoint.
    pub fn from_env() -> Self {
        let mut net = Self::default();
        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                net.api_url = url.trim().to_string();
            }
        }
        net
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn export_file_name_uses_iso_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(ExportOptions::file_name_for(date), "bookstore_data_2024-03-09.csv");

        let mut export = ExportOptions::default();
        export.set_dir("  exports/today ");
        assert_eq!(export.out_path_for(date), PathBuf::from("exports/today/bookstore_data_2024-03-09.csv"));

        export.set_dir("   ");
        assert_eq!(export.out_dir(), Path::new(DEFAULT_OUT_DIR));
    }

    #[test]
    fn randomized_seed_lands_in_range_and_parses_back() {
        let mut q = QueryOptions::default();
        let mut rng = StdRng::seed_from_u64(7);
        let seed = q.randomize_seed(&mut rng);
        assert!(seed < RANDOM_SEED_MAX);
        assert_eq!(q.to_params().seed, i64::from(seed));
    }
}
