//! Доменные модели: пользователи из сети и книги из локальных каталогов.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Address {
    pub street: String,
    pub suite: String,
    pub city: String,
    pub zipcode: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub username: String,
    pub email: String,
    pub address: Address,
}

impl User {
    /// `street, suite, city, zipcode` — одна строка для таблицы и xlsx.
    pub fn address_line(&self) -> String {
        let a = &self.address;
        format!("{}, {}, {}, {}", a.street, a.suite, a.city, a.zipcode)
    }
}

/// Книга в нормализованном виде, независимо от формата источника.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub category: String,
    pub title: String,
    pub authors: Vec<String>,
    pub year: String,
    /// Текст цены как в источнике, без переформатирования.
    pub price: String,
}

impl Book {
    pub fn author_line(&self) -> String {
        self.authors
            .join(", ")
            .trim_end_matches([' ', ','])
            .to_string()
    }
}
