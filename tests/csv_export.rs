// tests/csv_export.rs
use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;

use catalog_viewer::config::options::ExportOptions;
use catalog_viewer::file::write_export;
use catalog_viewer::{Book, ExportError, Review, WireBook};

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("catalog_export_{}", name));
    let _ = fs::remove_dir_all(&p);
    p
}

fn book(index: u64, title: &str, reviews: Vec<Review>) -> Book {
    Book::from(WireBook {
        index,
        isbn: format!("978-1-23-45678{index}-0"),
        title: title.to_string(),
        authors: vec!["Ann Lee".into(), "Bo Kim".into()],
        publisher: "Acme, Ltd.".into(),
        likes: 3.5,
        reviews,
    })
}

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 17).unwrap()
}

#[test]
fn writes_dated_file_into_created_directory() {
    let dir = tmp_dir("dated").join("nested");
    let mut opts = ExportOptions::default();
    opts.set_dir(dir.to_str().unwrap());

    let books = vec![
        book(1, "Alpha\"One", vec![Review { text: "Great".into(), author: "Zed".into() }]),
        book(2, "Beta", Vec::new()),
    ];
    let path = write_export(&opts, &books, date()).unwrap();

    assert_eq!(path, dir.join("bookstore_data_2024-05-17.csv"));
    let bytes = fs::read(&path).unwrap();
    assert!(bytes.starts_with(&[0xEF, 0xBB, 0xBF]));

    let text = String::from_utf8(bytes).unwrap();
    let lines: Vec<&str> = text.trim_start_matches('\u{FEFF}').lines().collect();
    assert_eq!(lines[0], "Index,ISBN,Title,Authors,Publisher,Likes,Reviews Count,Review Texts");
    assert_eq!(
        lines[1],
        r#"1,"978-1-23-456781-0","Alpha""One","Ann Lee, Bo Kim","Acme, Ltd.",3.5,1,"""Great"" (Zed)""#
    );
    assert_eq!(lines[2], r#"2,"978-1-23-456782-0","Beta","Ann Lee, Bo Kim","Acme, Ltd.",3.5,0,"""#);
    assert_eq!(lines.len(), 3);
}

#[test]
fn empty_list_writes_nothing() {
    let dir = tmp_dir("empty");
    let mut opts = ExportOptions::default();
    opts.set_dir(dir.to_str().unwrap());

    let err = write_export(&opts, &[], date()).unwrap_err();
    assert!(matches!(err, ExportError::NoData));
    assert_eq!(err.to_string(), "No data to export.");
    assert!(!dir.exists());
}

#[test]
fn export_over_existing_file_replaces_it() {
    let dir = tmp_dir("replace");
    let mut opts = ExportOptions::default();
    opts.set_dir(dir.to_str().unwrap());

    let first = write_export(&opts, &[book(1, "Old", Vec::new())], date()).unwrap();
    let second = write_export(&opts, &[book(2, "New", Vec::new())], date()).unwrap();
    assert_eq!(first, second);

    let text = fs::read_to_string(&second).unwrap();
    assert!(text.contains("\"New\""));
    assert!(!text.contains("\"Old\""));
}
