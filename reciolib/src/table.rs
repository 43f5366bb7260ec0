//! Общие помощники для таблиц фиксированной ширины.

use crate::model::Book;

pub const CATEGORY_WIDTH: usize = 15;
pub const TITLE_WIDTH: usize = 25;
pub const AUTHOR_WIDTH: usize = 30;
pub const YEAR_WIDTH: usize = 10;

/// Авторы длиннее этого числа символов обрезаются с многоточием.
pub const AUTHOR_CLIP: usize = 25;

/// Дополняет пробелами справа до `width` символов; длинные значения не режет.
pub fn pad(s: &str, width: usize) -> String {
    format!("{s:<width$}")
}

/// Строка авторов для колонки шириной ровно [`AUTHOR_WIDTH`].
pub fn author_cell(authors: &str) -> String {
    if authors.chars().count() > AUTHOR_CLIP {
        let head: String = authors.chars().take(AUTHOR_CLIP).collect();
        pad(&format!("{head}..."), AUTHOR_WIDTH)
    } else {
        pad(authors, AUTHOR_WIDTH)
    }
}

pub fn rule(len: usize) -> String {
    "-".repeat(len)
}

pub fn book_header() -> String {
    format!(
        "{}{}{}{}Price",
        pad("Category", CATEGORY_WIDTH),
        pad("Title", TITLE_WIDTH),
        pad("Author(s)", AUTHOR_WIDTH),
        pad("Year", YEAR_WIDTH),
    )
}

/// Строка книги; `price_prefix` — `""` для XML и `"$"` для JSON.
pub fn book_row(book: &Book, price_prefix: &str) -> String {
    format!(
        "{}{}{}{}{}{}",
        pad(&book.category, CATEGORY_WIDTH),
        pad(&book.title, TITLE_WIDTH),
        author_cell(&book.author_line()),
        pad(&book.year, YEAR_WIDTH),
        price_prefix,
        book.price,
    )
}
