//! Выгрузка записей в xlsx: один лист, строка заголовков, затем по строке на запись.

use crate::{
    error::Result,
    model::{Book, User},
};
use log::info;
use rust_decimal::{prelude::ToPrimitive, Decimal};
use rust_xlsxwriter::{Workbook, Worksheet};
use std::path::Path;

pub const DEFAULT_USERS_XLSX: &str = "UsersData.xlsx";
pub const DEFAULT_WORKSHEET: &str = "Users";

/// Настройки книги задаются явно при создании писателя.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetConfig {
    pub worksheet_name: String,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self { worksheet_name: DEFAULT_WORKSHEET.to_string() }
    }
}

/// Запись, которую можно положить в строку листа.
pub trait SheetRow {
    const HEADER: [&'static str; 5];

    fn write_row(&self, ws: &mut Worksheet, row: u32) -> Result<()>;
}

impl SheetRow for User {
    const HEADER: [&'static str; 5] = ["ID", "Name", "Username", "Email", "Address"];

    fn write_row(&self, ws: &mut Worksheet, row: u32) -> Result<()> {
        ws.write_number(row, 0, self.id as f64)?;
        ws.write_string(row, 1, &self.name)?;
        ws.write_string(row, 2, &self.username)?;
        ws.write_string(row, 3, &self.email)?;
        ws.write_string(row, 4, self.address_line())?;
        Ok(())
    }
}

impl SheetRow for Book {
    const HEADER: [&'static str; 5] = ["Category", "Title", "Author", "Year", "Price"];

    fn write_row(&self, ws: &mut Worksheet, row: u32) -> Result<()> {
        ws.write_string(row, 0, &self.category)?;
        ws.write_string(row, 1, &self.title)?;
        ws.write_string(row, 2, self.author_line())?;
        ws.write_string(row, 3, &self.year)?;
        match price_number(&self.price) {
            Some(n) => ws.write_number(row, 4, n)?,
            None => ws.write_string(row, 4, &self.price)?,
        };
        Ok(())
    }
}

/// Числовое значение цены для ячейки; нечисловой текст (`N/A`, `$30.00`) пишется строкой.
fn price_number(text: &str) -> Option<f64> {
    let t = text.trim();
    t.parse::<Decimal>()
        .or_else(|_| Decimal::from_scientific(t))
        .ok()
        .and_then(|d| d.to_f64())
}

pub struct SpreadsheetWriter {
    config: SheetConfig,
}

impl SpreadsheetWriter {
    pub fn new(config: SheetConfig) -> Self {
        Self { config }
    }

    pub fn write_users(&self, path: impl AsRef<Path>, users: &[User]) -> Result<()> {
        self.write_rows(path.as_ref(), users)
    }

    pub fn write_books(&self, path: impl AsRef<Path>, books: &[Book]) -> Result<()> {
        self.write_rows(path.as_ref(), books)
    }

    /// Существующий файл перезаписывается.
    pub fn write_rows<T: SheetRow>(&self, path: &Path, records: &[T]) -> Result<()> {
        let mut workbook = Workbook::new();
        let ws = workbook.add_worksheet();
        ws.set_name(&self.config.worksheet_name)?;

        for (col, title) in T::HEADER.iter().enumerate() {
            ws.write_string(0, col as u16, *title)?;
        }

        // строки xlsx здесь 0-based, данные начинаются со второй строки листа
        for (i, rec) in records.iter().enumerate() {
            rec.write_row(ws, i as u32 + 1)?;
        }

        workbook.save(path)?;
        info!("wrote {} rows to {}", records.len() + 1, path.display());
        Ok(())
    }
}
