//! JSON, полученный конвертацией XML: {"bookstore":{"book":[{"_category":..,"title":{"__text":..},..}]}}
//!
//! Одиночный `book` конвертеры пишут объектом, а не массивом — читаем оба варианта.

use crate::{
    error::{RecioError, Result},
    model::Book,
    table::{book_header, book_row, rule},
};
use serde_json::Value;
use std::io::{BufRead, Write};

/// Единственная линейка под заголовком; после строк линеек нет.
pub const HEADER_RULE: usize = 85;

pub const PRICE_PREFIX: &str = "$";

fn key<'a>(v: &'a Value, k: &str, path: &str, index: Option<usize>) -> Result<&'a Value> {
    match v.get(k) {
        Some(Value::Null) | None => Err(RecioError::missing(path, index)),
        Some(x) => Ok(x),
    }
}

/// Текст скаляра как в источнике: числа не переформатируются.
fn scalar_text(v: &Value, path: &str, index: usize) -> Result<String> {
    match v {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(RecioError::Parse(format!(
            "`{path}` of book #{index}: expected a scalar, got {other}"
        ))),
    }
}

fn title_text(book: &Value, index: usize) -> Result<String> {
    let title = key(book, "title", "title", Some(index))?;
    match title {
        Value::String(s) => Ok(s.clone()),
        Value::Object(_) => scalar_text(key(title, "__text", "title.__text", Some(index))?, "title.__text", index),
        other => scalar_text(other, "title", index),
    }
}

fn authors(book: &Value, index: usize) -> Result<Vec<String>> {
    match key(book, "author", "author", Some(index))? {
        Value::Array(items) => items
            .iter()
            .map(|a| scalar_text(a, "author", index))
            .collect(),
        single => Ok(vec![scalar_text(single, "author", index)?]),
    }
}

fn parse_book(book: &Value, index: usize) -> Result<Book> {
    let category = scalar_text(key(book, "_category", "_category", Some(index))?, "_category", index)?;
    let title = title_text(book, index)?;
    let authors = authors(book, index)?;
    let year = scalar_text(key(book, "year", "year", Some(index))?, "year", index)?;
    let price = scalar_text(key(book, "price", "price", Some(index))?, "price", index)?;

    Ok(Book { category, title, authors, year, price })
}

pub struct JsonCatalog;

impl crate::traits::ReadCatalog for JsonCatalog {
    type Record = Book;

    fn read<R: BufRead>(r: R) -> Result<Vec<Book>> {
        let root: Value = serde_json::from_reader(r)?;
        let store = key(&root, "bookstore", "bookstore", None)?;

        match key(store, "book", "bookstore.book", None)? {
            Value::Array(items) => items
                .iter()
                .enumerate()
                .map(|(i, b)| parse_book(b, i))
                .collect(),
            single @ Value::Object(_) => Ok(vec![parse_book(single, 0)?]),
            other => Err(RecioError::Parse(format!(
                "`bookstore.book`: expected an array, got {other}"
            ))),
        }
    }
}

impl crate::traits::RenderTable for JsonCatalog {
    fn render<W: Write>(mut w: W, books: &[Book]) -> Result<()> {
        writeln!(w, "{}", book_header())?;
        writeln!(w, "{}", rule(HEADER_RULE))?;

        for b in books {
            writeln!(w, "{}", book_row(b, PRICE_PREFIX))?;
        }
        Ok(())
    }
}
