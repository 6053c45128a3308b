use reqwest::Url;
use serde_json::Value;

use super::SpotifyClient;
use crate::Error;

impl SpotifyClient {
    /// Builds the URL the browser is sent to for user authorization.
    pub fn authorize_url(&self) -> Result<String, Error> {
        let url = Url::parse_with_params(
            &self.endpoints.auth_url,
            &[
                ("client_id", self.credentials.client_id.as_str()),
                ("response_type", "code"),
                ("redirect_uri", self.credentials.redirect_uri.as_str()),
                ("scope", self.endpoints.scope.as_str()),
            ],
        )
        .map_err(|e| Error::InvalidUrl(format!("{}: {}", self.endpoints.auth_url, e)))?;

        Ok(url.to_string())
    }

    /// Exchanges an authorization code for an access token.
    ///
    /// Returns the token response verbatim. A body carrying an `error` field
    /// is turned into [`Error::Upstream`] regardless of the HTTP status.
    pub async fn exchange_code(&self, code: &str) -> Result<Value, Error> {
        let res = self
            .client
            .post(&self.endpoints.token_url)
            .form(&[
                ("grant_type", "authorization_code"),
                ("code", code),
                ("redirect_uri", self.credentials.redirect_uri.as_str()),
                ("client_id", self.credentials.client_id.as_str()),
                ("client_secret", self.credentials.client_secret.as_str()),
            ])
            .send()
            .await?;

        let json: Value = res.json().await?;

        if let Some(error) = json.get("error") {
            let description = json
                .get("error_description")
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| error.to_string());
            return Err(Error::Upstream(description));
        }

        Ok(json)
    }
}
