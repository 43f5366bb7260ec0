//! Произвольный CSV: запятая как разделитель, кавычки по стандарту, без заголовка.
//! Поля печатаются как есть, объекты `Book` не строятся.

use crate::error::Result;
use csv::{ReaderBuilder, Trim};
use std::io::{BufRead, Write};

pub const FIELD_WIDTH: usize = 20;

pub struct CsvCatalog;

impl crate::traits::ReadCatalog for CsvCatalog {
    type Record = Vec<String>;

    fn read<R: BufRead>(r: R) -> Result<Vec<Vec<String>>> {
        // первая строка файла — обычная строка данных
        let mut rdr = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(Trim::Fields)
            .from_reader(r);

        let mut rows = Vec::new();
        for rec in rdr.records() {
            let rec = rec?;
            rows.push(rec.iter().map(str::to_string).collect());
        }
        Ok(rows)
    }
}

impl crate::traits::RenderTable for CsvCatalog {
    fn render<W: Write>(mut w: W, rows: &[Vec<String>]) -> Result<()> {
        for row in rows {
            for field in row {
                write!(w, "{field:<width$}", width = FIELD_WIDTH)?;
            }
            writeln!(w)?;
        }
        Ok(())
    }
}
