//! Загрузка пользователей по HTTP.

use crate::{error::Result, model::User};
use log::{debug, info};

pub const DEFAULT_USERS_URL: &str = "https://jsonplaceholder.typicode.com/users";

pub struct UserFetcher {
    client: reqwest::Client,
    url: String,
}

impl UserFetcher {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), url)
    }

    pub fn with_client(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self { client, url: url.into() }
    }

    /// Один GET без таймаута и повторов.
    ///
    /// Неуспешный статус — не ошибка: возвращается `None`, и дальше ничего не делается.
    pub async fn fetch(&self) -> Result<Option<Vec<User>>> {
        debug!("GET {}", self.url);
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            info!("{} answered {status}, skipping", self.url);
            return Ok(None);
        }

        let body = response.text().await?;
        let users = parse_users(&body)?;
        debug!("fetched {} users", users.len());
        Ok(Some(users))
    }
}

/// JSON-массив пользователей; порядок сохраняется.
pub fn parse_users(body: &str) -> Result<Vec<User>> {
    Ok(serde_json::from_str(body)?)
}
