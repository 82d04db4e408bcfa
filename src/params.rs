// src/params.rs
use crate::core::parse::{leading_float, leading_int};

/// Everything the remote generator needs besides the page window.
/// Any change to these invalidates every loaded book.
#[derive(Clone, Debug, PartialEq)]
pub struct QueryParameters {
    pub language: String,
    pub region: Option<String>,
    pub seed: i64,
    pub average_likes: f64,
    pub average_reviews: f64,
}

impl Default for QueryParameters {
    fn default() -> Self {
        crate::config::options::QueryOptions::default().to_params()
    }
}

impl QueryParameters {
    /// Build from raw form inputs. Unparseable seed/reviews fall back to 0.
    pub fn from_inputs(locale: &str, seed_text: &str, avg_likes: f64, reviews_text: &str) -> Self {
        let (language, region) = split_locale(locale);
        Self {
            language,
            region,
            seed: leading_int(seed_text).unwrap_or(0),
            average_likes: if avg_likes.is_finite() { avg_likes } else { 0.0 },
            average_reviews: leading_float(reviews_text).unwrap_or(0.0),
        }
    }
}

/// `"en-US"` -> `("en", Some("US"))`. Splits on the first hyphen only.
pub fn split_locale(selector: &str) -> (String, Option<String>) {
    match selector.trim().split_once('-') {
        Some((lang, region)) if !region.is_empty() => (s!(lang), Some(s!(region))),
        Some((lang, _)) => (s!(lang), None),
        None => (s!(selector.trim()), None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locale_split_on_first_hyphen() {
        assert_eq!(split_locale("en-US"), (s!("en"), Some(s!("US"))));
        assert_eq!(split_locale("en"), (s!("en"), None));
        assert_eq!(split_locale("zh-Hant-TW"), (s!("zh"), Some(s!("Hant-TW"))));
        assert_eq!(split_locale("de-"), (s!("de"), None));
    }

    #[test]
    fn inputs_fall_back_to_zero() {
        let q = QueryParameters::from_inputs("fr-FR", "seed?", 3.5, "lots");
        assert_eq!(q.language, "fr");
        assert_eq!(q.region.as_deref(), Some("FR"));
        assert_eq!(q.seed, 0);
        assert_eq!(q.average_likes, 3.5);
        assert_eq!(q.average_reviews, 0.0);

        let q = QueryParameters::from_inputs("en-US", "123abc", 0.0, "2.5");
        assert_eq!(q.seed, 123);
        assert_eq!(q.average_reviews, 2.5);
    }
}
