//! Точка входа: пользователи из сети, затем три локальных каталога — независимо друг от друга.

use crate::{
    error::{RecioError, Result},
    fetch::{UserFetcher, DEFAULT_USERS_URL},
    formats::{csv::CsvCatalog, json::JsonCatalog, xml::XmlCatalog},
    report::render_users,
    sheet::{SheetConfig, SpreadsheetWriter, DEFAULT_USERS_XLSX},
    traits::Catalog,
};
use log::{debug, info};
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

pub const DEFAULT_XML: &str = "books.xml";
pub const DEFAULT_CSV: &str = "books.csv";
pub const DEFAULT_JSON: &str = "books.json";

#[derive(Debug, Clone)]
pub struct Settings {
    pub users_url: String,
    pub users_xlsx: PathBuf,
    pub xml_path: PathBuf,
    pub csv_path: PathBuf,
    pub json_path: PathBuf,
    /// Если задан, каталог из JSON дополнительно выгружается в xlsx.
    pub books_xlsx: Option<PathBuf>,
    pub sheet: SheetConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            users_url: DEFAULT_USERS_URL.to_string(),
            users_xlsx: DEFAULT_USERS_XLSX.into(),
            xml_path: DEFAULT_XML.into(),
            csv_path: DEFAULT_CSV.into(),
            json_path: DEFAULT_JSON.into(),
            books_xlsx: None,
            sheet: SheetConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Сервер ответил неуспешным статусом; ничего не напечатано и не записано.
    Skipped,
    Completed { users: usize },
}

pub fn open_input(path: &Path) -> Result<BufReader<File>> {
    match File::open(path) {
        Ok(f) => Ok(BufReader::new(f)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(RecioError::NotFound(path.to_path_buf())),
        Err(e) => Err(e.into()),
    }
}

/// Читает каталог и печатает его таблицу; файл закрывается по выходу из функции.
pub fn print_catalog<C: Catalog, W: Write>(path: &Path, w: W) -> Result<Vec<C::Record>> {
    let records = C::read(open_input(path)?)?;
    debug!("{}: {} records", path.display(), records.len());
    C::render(w, &records)?;
    Ok(records)
}

pub async fn run<W: Write>(settings: &Settings, out: &mut W) -> Result<Outcome> {
    let fetcher = UserFetcher::new(settings.users_url.as_str());
    run_with(settings, &fetcher, out).await
}

pub async fn run_with<W: Write>(settings: &Settings, fetcher: &UserFetcher, out: &mut W) -> Result<Outcome> {
    let Some(users) = fetcher.fetch().await? else {
        return Ok(Outcome::Skipped);
    };

    render_users(&mut *out, &users)?;

    let writer = SpreadsheetWriter::new(settings.sheet.clone());
    writer.write_users(&settings.users_xlsx, &users)?;
    writeln!(out, "Excel file created successfully.")?;

    writeln!(out, "======Reading XML FILE======")?;
    print_catalog::<XmlCatalog, _>(&settings.xml_path, &mut *out)?;

    writeln!(out, "==========ReadCSV==========")?;
    print_catalog::<CsvCatalog, _>(&settings.csv_path, &mut *out)?;

    writeln!(out, "==========READJSON==========")?;
    let books = print_catalog::<JsonCatalog, _>(&settings.json_path, &mut *out)?;

    if let Some(path) = &settings.books_xlsx {
        writer.write_books(path, &books)?;
        writeln!(out, "Excel file created successfully.")?;
    }

    out.flush()?;
    info!("done: {} users", users.len());
    Ok(Outcome::Completed { users: users.len() })
}
