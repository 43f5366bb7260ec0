//! Каталог книг в XML: <books><book category="..."><title/><author/>...<year/><price/></book></books>

use crate::{
    error::{RecioError, Result},
    model::Book,
    table::{book_header, book_row, rule},
};
use log::debug;
use quick_xml::{de::from_str, events::Event, Reader};
use serde::Deserialize;
use std::io::{BufRead, Read, Write};

const ROOT: &str = "books";

/// Линейка под заголовком таблицы.
pub const HEADER_RULE: usize = 104;
/// Линейка после каждой строки.
pub const ROW_RULE: usize = 130;

/// Текст элемента; атрибуты (например, `lang` у `title`) игнорируются.
#[derive(Deserialize, Debug, Default)]
struct XmlText {
    #[serde(rename = "$text", default)]
    value: String,
}

#[derive(Deserialize, Debug)]
struct XmlBook {
    #[serde(rename = "@category")]
    category: Option<String>,
    title: Option<XmlText>,
    #[serde(rename = "author", default)]
    authors: Vec<XmlText>,
    year: Option<XmlText>,
    price: Option<XmlText>,
}

#[derive(Deserialize, Debug)]
#[serde(rename = "books")]
struct XmlBooks {
    #[serde(rename = "book", default)]
    books: Vec<XmlBook>,
}

fn required<T>(v: Option<T>, field: &str, index: usize) -> Result<T> {
    v.ok_or_else(|| RecioError::missing(field, Some(index)))
}

/// Книги берутся только из-под корня `books`; другой корень — пустой каталог.
fn root_is_books(xml: &str) -> Result<bool> {
    let mut reader = Reader::from_str(xml);
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                return Ok(e.name().as_ref() == ROOT.as_bytes());
            }
            Ok(Event::Eof) => return Ok(false),
            Ok(_) => {}
            Err(e) => return Err(RecioError::Xml(format!("{e}"))),
        }
    }
}

pub struct XmlCatalog;

impl crate::traits::ReadCatalog for XmlCatalog {
    type Record = Book;

    fn read<R: BufRead>(mut r: R) -> Result<Vec<Book>> {
        let mut xml = String::new();
        r.read_to_string(&mut xml)?;
        if !root_is_books(&xml)? {
            debug!("root element is not <{ROOT}>, no books");
            return Ok(Vec::new());
        }

        let x: XmlBooks = from_str(&xml).map_err(|e| RecioError::Xml(format!("{e}")))?;

        let mut books = Vec::with_capacity(x.books.len());
        for (i, b) in x.books.into_iter().enumerate() {
            let category = required(b.category, "category", i)?;
            let title = required(b.title, "title", i)?.value;
            let year = required(b.year, "year", i)?.value;
            let price = required(b.price, "price", i)?.value;

            books.push(Book {
                category,
                title,
                authors: b.authors.into_iter().map(|a| a.value).collect(),
                year,
                price,
            });
        }
        Ok(books)
    }
}

impl crate::traits::RenderTable for XmlCatalog {
    fn render<W: Write>(mut w: W, books: &[Book]) -> Result<()> {
        writeln!(w, "{}", book_header())?;
        writeln!(w, "{}", rule(HEADER_RULE))?;

        let sep = rule(ROW_RULE);
        for b in books {
            writeln!(w, "{}", book_row(b, ""))?;
            writeln!(w, "{sep}")?;
        }
        Ok(())
    }
}
