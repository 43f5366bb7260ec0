//! Единый тип ошибок публичного API.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecioError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("deserialization error: {0}")]
    Deserialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("XML error: {0}")]
    Xml(String),

    #[error("missing field `{field}`{}", .index.map(|i| format!(" in book #{i}")).unwrap_or_default())]
    MissingField {
        field: String,
        index: Option<usize>,
    },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("spreadsheet error: {0}")]
    Spreadsheet(#[from] rust_xlsxwriter::XlsxError),
}

impl RecioError {
    pub(crate) fn missing(field: impl Into<String>, index: Option<usize>) -> Self {
        RecioError::MissingField { field: field.into(), index }
    }
}

pub type Result<T> = std::result::Result<T, RecioError>;
