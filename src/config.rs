//! Configuration management for APOD Tunes.
//!
//! This module handles the two configuration sources of the server:
//!
//! 1. A JSON credentials file (`auth/credentials.json` by default) holding the
//!    Spotify client id, client secret, redirect URI and the NASA API key. It is
//!    read once at startup and shared read-only for the lifetime of the process.
//! 2. Environment variables, optionally loaded from a `.env` file in the working
//!    directory, that override the server address and upstream endpoints. Every
//!    variable has a production default, so no `.env` file is required.

use std::{env, io::ErrorKind, path::Path};

use serde::Deserialize;

use crate::{Error, warning};

pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:3000";
pub const DEFAULT_CREDENTIALS_PATH: &str = "auth/credentials.json";
pub const DEFAULT_TOKEN_PATH: &str = "auth/user-token.json";
pub const DEFAULT_HOME_PAGE_PATH: &str = "html/main.html";

const DEFAULT_SPOTIFY_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
const DEFAULT_SPOTIFY_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
const DEFAULT_SPOTIFY_API_URL: &str = "https://api.spotify.com/v1";
const DEFAULT_SPOTIFY_SCOPE: &str = "playlist-modify-public";
const DEFAULT_NASA_API_URL: &str = "https://api.nasa.gov";

/// Client credentials for both upstream APIs.
///
/// Mirrors the layout of the credentials file:
///
/// ```json
/// {
///   "client_id": "...",
///   "client_secret": "...",
///   "redirect_uri": "http://localhost:3000/callback",
///   "nasa_api_key": "..."
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    pub nasa_api_key: String,
}

impl Credentials {
    /// Reads and parses the credentials file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read and [`Error::Json`] if
    /// it is not valid JSON or lacks one of the four required fields.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let content = async_fs::read_to_string(path.as_ref()).await?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self, Error> {
        let credentials: Credentials = serde_json::from_str(content)?;
        if credentials.client_id.is_empty() {
            return Err(Error::Config("client_id must not be empty".to_string()));
        }
        if credentials.redirect_uri.is_empty() {
            return Err(Error::Config("redirect_uri must not be empty".to_string()));
        }
        Ok(credentials)
    }
}

/// Loads environment variables from a `.env` file in the working directory.
///
/// A missing file is not an error since every variable has a default. A file
/// that exists but cannot be parsed is reported as a warning.
pub fn load_env() {
    match dotenv::dotenv() {
        Ok(_) => {}
        Err(dotenv::Error::Io(e)) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => warning!("Cannot load .env file. Err: {}", e),
    }
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Returns the address the HTTP server binds to (`SERVER_ADDRESS`).
///
/// # Example
///
/// ```
/// let addr = server_addr(); // e.g., "127.0.0.1:3000"
/// ```
pub fn server_addr() -> String {
    var_or("SERVER_ADDRESS", DEFAULT_SERVER_ADDRESS)
}

/// Returns the Spotify OAuth authorization URL (`SPOTIFY_API_AUTH_URL`).
pub fn spotify_apiauth_url() -> String {
    var_or("SPOTIFY_API_AUTH_URL", DEFAULT_SPOTIFY_AUTH_URL)
}

/// Returns the Spotify OAuth token exchange URL (`SPOTIFY_API_TOKEN_URL`).
pub fn spotify_apitoken_url() -> String {
    var_or("SPOTIFY_API_TOKEN_URL", DEFAULT_SPOTIFY_TOKEN_URL)
}

/// Returns the Spotify Web API base URL (`SPOTIFY_API_URL`).
pub fn spotify_apiurl() -> String {
    var_or("SPOTIFY_API_URL", DEFAULT_SPOTIFY_API_URL)
}

/// Returns the scope requested during authorization (`SPOTIFY_API_AUTH_SCOPE`).
pub fn spotify_scope() -> String {
    var_or("SPOTIFY_API_AUTH_SCOPE", DEFAULT_SPOTIFY_SCOPE)
}

/// Returns the NASA API base URL (`NASA_API_URL`).
pub fn nasa_apiurl() -> String {
    var_or("NASA_API_URL", DEFAULT_NASA_API_URL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_credentials_file() {
        let credentials = Credentials::from_json(
            r#"{
                "client_id": "abc",
                "client_secret": "def",
                "redirect_uri": "http://localhost:3000/callback",
                "nasa_api_key": "DEMO_KEY"
            }"#,
        )
        .unwrap();

        assert_eq!(credentials.client_id, "abc");
        assert_eq!(credentials.nasa_api_key, "DEMO_KEY");
    }

    #[test]
    fn rejects_credentials_without_api_key() {
        let result = Credentials::from_json(
            r#"{"client_id": "abc", "client_secret": "def", "redirect_uri": "http://x/callback"}"#,
        );
        assert!(matches!(result, Err(Error::Json(_))));
    }

    #[test]
    fn rejects_empty_client_id() {
        let result = Credentials::from_json(
            r#"{"client_id": "", "client_secret": "def", "redirect_uri": "http://x/callback", "nasa_api_key": "k"}"#,
        );
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
