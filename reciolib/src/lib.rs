//! reciolib — загрузка пользователей, чтение каталогов книг (XML, CSV, JSON) и выгрузка в xlsx

pub mod error;
pub mod model;
pub mod traits;
pub mod table;
pub mod fetch;
pub mod report;
pub mod sheet;
pub mod runner;

pub mod formats {
    pub mod csv;
    pub mod xml;
    pub mod json;
}
