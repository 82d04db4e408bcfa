// tests/http_source.rs
use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use catalog_viewer::config::options::NetOptions;
use catalog_viewer::core::net::{CatalogSource, HttpSource};
use catalog_viewer::{LoadError, PageRequest, PageResponse, QueryParameters};

const ENDPOINT: &str = "/api/Books/generate";

/// The blocking client owns its own runtime; build, use and drop it off the
/// async test thread.
async fn fetch(server: &MockServer, req: PageRequest) -> Result<PageResponse, LoadError> {
    let url = format!("{}{}", server.uri(), ENDPOINT);
    tokio::task::spawn_blocking(move || {
        let net = NetOptions { api_url: url, timeout: Duration::from_secs(5) };
        HttpSource::new(&net)?.fetch(&req)
    })
    .await
    .expect("fetch task panicked")
}

fn sample_page() -> serde_json::Value {
    json!({
        "books": [
            {
                "index": 1,
                "isbn": "978-3-16-148410-0",
                "title": "Der Prozess",
                "authors": ["Franz Kafka"],
                "publisher": "Die Schmiede",
                "likes": 4.5,
                "reviews": [{ "text": "Unsettling.", "author": "M. Brod" }]
            },
            {
                "index": 2,
                "isbn": "978-0-00-000000-2",
                "title": "Untitled",
                "publisher": "Nobody",
                "likes": 0
            }
        ],
        "totalGenerated": 1000
    })
}

#[tokio::test]
async fn posts_camel_case_body_and_parses_books() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "language": "de",
            "region": "DE",
            "seed": 42,
            "averageLikes": 5.0,
            "averageReviews": 2.0,
            "startIndex": 0,
            "count": 20
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_page()))
        .expect(1)
        .mount(&server)
        .await;

    let q = QueryParameters::from_inputs("de-DE", "42", 5.0, "2");
    let page = fetch(&server, PageRequest::new(&q, 0, 20)).await.unwrap();

    assert_eq!(page.total_generated, 1000);
    assert_eq!(page.books.len(), 2);
    assert_eq!(page.books[0].authors, vec!["Franz Kafka".to_string()]);
    assert_eq!(page.books[0].reviews[0].author, "M. Brod");
    assert!(page.books[1].authors.is_empty());
    assert!(page.books[1].reviews.is_empty());
}

#[tokio::test]
async fn omits_region_when_locale_has_none() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .and(body_json(json!({
            "language": "en",
            "seed": 7,
            "averageLikes": 1.5,
            "averageReviews": 0.5,
            "startIndex": 20,
            "count": 10
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "totalGenerated": 0 })))
        .expect(1)
        .mount(&server)
        .await;

    let q = QueryParameters::from_inputs("en", "7", 1.5, "0.5");
    let page = fetch(&server, PageRequest::new(&q, 20, 10)).await.unwrap();
    assert!(page.books.is_empty());
}

#[tokio::test]
async fn non_success_status_is_a_status_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let err = fetch(&server, PageRequest::new(&QueryParameters::default(), 0, 20))
        .await
        .unwrap_err();
    match err {
        LoadError::Status { status, reason } => {
            assert_eq!(status, 500);
            assert_eq!(reason, "Internal Server Error");
        }
        other => panic!("expected Status, got {other:?}"),
    }
}

#[tokio::test]
async fn invalid_json_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let err = fetch(&server, PageRequest::new(&QueryParameters::default(), 0, 20))
        .await
        .unwrap_err();
    assert!(matches!(err, LoadError::Malformed(_)), "got {err:?}");
}
