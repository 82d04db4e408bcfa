// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use chrono::{NaiveDate, Utc};

use crate::config::options::ExportOptions;
use crate::csv::to_export_string;
use crate::data::Book;
use crate::error::ExportError;

/// Write the loaded books to `<out_dir>/bookstore_data_<date>.csv`.
/// Nothing touches the disk when there is nothing to export.
pub fn write_export(
    export: &ExportOptions,
    books: &[Book],
    date: NaiveDate,
) -> Result<PathBuf, ExportError> {
    let contents = to_export_string(books)?;
    let path = export.out_path_for(date);

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    fs::write(&path, contents)?;
    Ok(path)
}

/// `write_export` stamped with today's UTC date.
pub fn write_export_today(export: &ExportOptions, books: &[Book]) -> Result<PathBuf, ExportError> {
    write_export(export, books, Utc::now().date_naive())
}

pub fn ensure_directory(dir: &Path) -> std::io::Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::AlreadyExists,
            format!("Path exists but is not a directory: {}", dir.display()),
        ));
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}
