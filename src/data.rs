// src/data.rs
//! Wire shapes for the generation API and the ingested `Book`.
//!
//! `WireBook` is exactly what the server sends. `Book` is what the rest of the
//! crate sees: same fields plus the display-only values derived once at
//! ingestion (joined authors, cover color). Books are never mutated after that.

use serde::{Deserialize, Serialize};

use crate::core::cover::{CoverColor, cover_for};
use crate::params::QueryParameters;

/// One POST body. `region` is omitted entirely when the locale has none.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    pub language: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    pub seed: i64,
    pub average_likes: f64,
    pub average_reviews: f64,
    pub start_index: u64,
    pub count: u32,
}

impl PageRequest {
    pub fn new(query: &QueryParameters, start_index: u64, count: u32) -> Self {
        Self {
            language: query.language.clone(),
            region: query.region.clone(),
            seed: query.seed,
            average_likes: query.average_likes,
            average_reviews: query.average_reviews,
            start_index,
            count,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse {
    #[serde(default)]
    pub books: Vec<WireBook>,
    pub total_generated: u64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub text: String,
    pub author: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WireBook {
    pub index: u64,
    pub isbn: String,
    pub title: String,
    #[serde(default)]
    pub authors: Vec<String>,
    pub publisher: String,
    pub likes: f64,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Book {
    pub index: u64,
    pub isbn: String,
    pub title: String,
    pub authors: Vec<String>,
    /// `authors` joined with ", "
    pub authors_display: String,
    pub publisher: String,
    pub likes: f64,
    pub reviews: Vec<Review>,
    pub cover: CoverColor,
}

impl From<WireBook> for Book {
    fn from(w: WireBook) -> Self {
        let authors_display = w.authors.join(", ");
        let cover = cover_for(w.index);
        Self {
            index: w.index,
            isbn: w.isbn,
            title: w.title,
            authors: w.authors,
            authors_display,
            publisher: w.publisher,
            likes: w.likes,
            reviews: w.reviews,
            cover,
        }
    }
}

impl Book {
    /// `"<text>" (<author>)` entries joined with "; ".
    pub fn review_summary(&self) -> String {
        self.reviews
            .iter()
            .map(|r| format!("\"{}\" ({})", r.text, r.author))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_camel_case_and_skips_missing_region() {
        let mut q = QueryParameters::from_inputs("en", "9", 4.5, "1");
        let body = serde_json::to_value(PageRequest::new(&q, 20, 10)).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "language": "en", "seed": 9, "averageLikes": 4.5,
                "averageReviews": 1.0, "startIndex": 20, "count": 10
            })
        );

        q.region = Some(s!("GB"));
        let body = serde_json::to_value(PageRequest::new(&q, 0, 20)).unwrap();
        assert_eq!(body["region"], "GB");
    }

    #[test]
    fn response_tolerates_missing_books_but_not_missing_total() {
        let r: PageResponse = serde_json::from_str(r#"{"totalGenerated": 5}"#).unwrap();
        assert!(r.books.is_empty());
        assert_eq!(r.total_generated, 5);

        assert!(serde_json::from_str::<PageResponse>(r#"{"books": []}"#).is_err());
    }

    #[test]
    fn ingestion_derives_display_fields() {
        let w: WireBook = serde_json::from_str(
            r#"{"index": 2, "isbn": "978-1", "title": "T", "authors": ["A", "B"],
                "publisher": "P", "likes": 3, "reviews": [{"text": "Nice", "author": "Z"}]}"#,
        )
        .unwrap();
        let b = Book::from(w);
        assert_eq!(b.authors_display, "A, B");
        assert_eq!(b.cover, cover_for(2));
        assert_eq!(b.review_summary(), "\"Nice\" (Z)");
        assert_eq!(b.likes.to_string(), "3");
    }
}
