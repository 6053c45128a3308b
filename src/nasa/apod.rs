use reqwest::Client;
use serde_json::Value;

use crate::{Error, types::Apod};

/// Client for NASA's Astronomy Picture of the Day endpoint.
#[derive(Debug, Clone)]
pub struct NasaClient {
    client: Client,
    api_url: String,
    api_key: String,
}

impl NasaClient {
    pub fn new(api_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        NasaClient {
            client: Client::new(),
            api_url: api_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Fetches the picture of the day for `date` (`YYYY-MM-DD`).
    ///
    /// The HTTP status is not inspected: NASA's error bodies carry no `title`,
    /// so they fail the same way as a malformed or title-less payload.
    pub async fn fetch_apod(&self, date: &str) -> Result<Apod, Error> {
        let api_url = format!(
            "{uri}/planetary/apod",
            uri = self.api_url.trim_end_matches('/')
        );

        let response = self
            .client
            .get(&api_url)
            .query(&[("api_key", self.api_key.as_str()), ("date", date)])
            .send()
            .await?;

        let body = response.text().await?;
        let json: Value = serde_json::from_str(&body)?;

        let has_title = json
            .get("title")
            .and_then(Value::as_str)
            .is_some_and(|t| !t.is_empty());
        if !has_title {
            return Err(Error::MissingField("title"));
        }

        Ok(serde_json::from_value(json)?)
    }
}
