//! Унифицированные трэйты чтения каталога и печати таблицы на основе std::io::{BufRead, Write}.

use crate::error::Result;
use std::io::{BufRead, Write};

pub trait ReadCatalog {
    type Record;

    fn read<R: BufRead>(r: R) -> Result<Vec<Self::Record>>;
}

pub trait RenderTable: ReadCatalog {
    fn render<W: Write>(w: W, records: &[Self::Record]) -> Result<()>;
}

pub trait Catalog: ReadCatalog + RenderTable {}
impl<T: ReadCatalog + RenderTable> Catalog for T {}
