// src/csv.rs
//
// CSV export text. Header is plain. In data rows the five text columns are
// always quoted with inner quotes doubled, even when they look numeric
// ("1984", "NaN"); Index / Likes / Reviews Count stay bare.

use std::io;

use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::config::consts::{CSV_BOM, CSV_HEADERS};
use crate::data::Book;
use crate::error::ExportError;

/// One export row, in `CSV_HEADERS` order, text cells already quoted.
pub fn export_row(book: &Book) -> Result<[String; 8], ExportError> {
    Ok([
        book.index.to_string(),
        quoted(&book.isbn)?,
        quoted(&book.title)?,
        quoted(&book.authors_display)?,
        quoted(&book.publisher)?,
        book.likes.to_string(),
        book.reviews.len().to_string(),
        quoted(&book.review_summary())?,
    ])
}

/// `field` as a single quoted CSV cell.
fn quoted(field: &str) -> Result<String, ExportError> {
    let mut w = writer(QuoteStyle::Always, Vec::with_capacity(field.len() + 3));
    w.write_record([field])?;
    let mut cell = w.into_inner().map_err(|e| e.into_error())?;
    cell.pop(); // terminator
    String::from_utf8(cell).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e).into())
}

/// Full export file contents: BOM, header, one row per book.
/// Empty input is `ExportError::NoData`.
pub fn to_export_string(books: &[Book]) -> Result<String, ExportError> {
    if books.is_empty() {
        return Err(ExportError::NoData);
    }

    let mut buf: Vec<u8> = Vec::with_capacity(CSV_BOM.len() + books.len() * 160);
    buf.extend_from_slice(CSV_BOM.as_bytes());

    {
        let mut w = writer(QuoteStyle::Necessary, &mut buf);
        w.write_record(CSV_HEADERS)?;
        w.flush()?;
    }
    {
        // Cells arrive pre-quoted; write them verbatim.
        let mut w = writer(QuoteStyle::Never, &mut buf);
        for book in books {
            w.write_record(export_row(book)?)?;
        }
        w.flush()?;
    }

    String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e).into())
}

fn writer<W: io::Write>(style: QuoteStyle, out: W) -> csv::Writer<W> {
    WriterBuilder::new()
        .quote_style(style)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Review, WireBook};

    fn book(index: u64, title: &str, reviews: Vec<Review>) -> Book {
        Book::from(WireBook {
            index,
            isbn: s!("978-1-86197-876-9"),
            title: s!(title),
            authors: vec![s!("Jo \"JJ\" Smith"), s!("Al Roe")],
            publisher: s!("North, South & Co"),
            likes: 3.5,
            reviews,
        })
    }

    #[test]
    fn empty_list_is_no_data() {
        assert!(matches!(to_export_string(&[]), Err(ExportError::NoData)));
    }

    #[test]
    fn header_then_quoted_text_fields() {
        let text = to_export_string(&[book(1, "Alpha\"One", vec![]), book(2, "Beta", vec![])]).unwrap();
        let body = text.strip_prefix('\u{FEFF}').expect("BOM first");
        let lines: Vec<&str> = body.lines().collect();

        assert_eq!(lines[0], "Index,ISBN,Title,Authors,Publisher,Likes,Reviews Count,Review Texts");
        assert!(lines[1].starts_with("1,\"978-1-86197-876-9\",\"Alpha\"\"One\","));
        assert!(lines[2].starts_with("2,\"978-1-86197-876-9\",\"Beta\","));
        assert!(lines[1].contains("\"Jo \"\"JJ\"\" Smith, Al Roe\""));
        assert!(lines[1].contains(",\"North, South & Co\",3.5,0,"));
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn reviews_are_joined_and_escaped_as_one_field() {
        let reviews = vec![
            Review { text: s!("Great"), author: s!("Ann") },
            Review { text: s!("Meh"), author: s!("Bob") },
        ];
        let text = to_export_string(&[book(7, "Gamma", reviews)]).unwrap();
        let row = text.lines().nth(1).unwrap();
        assert!(row.ends_with(",2,\"\"\"Great\"\" (Ann); \"\"Meh\"\" (Bob)\""));

        // And it reads back as the intended 8 columns.
        let mut rdr = csv::ReaderBuilder::new().from_reader(text.trim_start_matches('\u{FEFF}').as_bytes());
        let rec = rdr.records().next().unwrap().unwrap();
        assert_eq!(rec.len(), 8);
        assert_eq!(&rec[7], "\"Great\" (Ann); \"Meh\" (Bob)");
    }

    #[test]
    fn numeric_looking_text_is_still_quoted() {
        let b = Book::from(WireBook {
            index: 1,
            isbn: s!("9781861978769"),
            title: s!("1984"),
            authors: vec![s!("George Orwell")],
            publisher: s!("NaN"),
            likes: 2.0,
            reviews: vec![],
        });
        let text = to_export_string(&[b]).unwrap();
        let row = text.lines().nth(1).unwrap();
        assert_eq!(row, r#"1,"9781861978769","1984","George Orwell","NaN",2,0,"""#);
    }
}
