//! # Spotify Integration Module
//!
//! This module provides the slice of the Spotify Web API that APOD Tunes needs:
//! the OAuth 2.0 authorization code flow and the track search endpoint.
//!
//! ## Architecture
//!
//! ```text
//! API handlers (/authorize, /callback, /search)
//!          ↓
//! SpotifyClient
//!     ├── Authentication (authorize URL, code exchange)
//!     └── Search (tracks by free-text query)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Accounts service / Web API
//! ```
//!
//! ## Authentication Strategy
//!
//! The server uses the classic authorization code flow with a client secret:
//!
//! 1. **Authorization Request**: the browser is redirected to the accounts
//!    service with `client_id`, `response_type=code`, `redirect_uri` and the
//!    requested scope
//! 2. **Callback**: Spotify redirects back to `/callback?code=...`
//! 3. **Token Exchange**: the code is POSTed together with the client id and
//!    secret to the token endpoint
//! 4. **Token Storage**: the response is cached by a
//!    [`crate::management::TokenStore`]
//!
//! There is no refresh flow. Once the cached token expires the user is sent
//! through the authorization request again.
//!
//! ## API Coverage
//!
//! - `GET /authorize` - user authorization (redirect only, never called directly)
//! - `POST /api/token` - authorization code exchange
//! - `GET /v1/search?type=track&q=` - track search
//!
//! ## Error Types
//!
//! All operations return [`crate::Error`]. A `401` from the search endpoint is
//! reported as [`crate::Error::Unauthorized`] so callers can restart the
//! authorization flow instead of failing the request.

use std::sync::Arc;

use reqwest::Client;

use crate::config::{self, Credentials};

mod auth;
mod search;

/// Base URLs and scope used by [`SpotifyClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpotifyEndpoints {
    pub auth_url: String,
    pub token_url: String,
    pub api_url: String,
    pub scope: String,
}

impl SpotifyEndpoints {
    /// Reads the endpoints from the environment, falling back to Spotify's
    /// production URLs.
    pub fn from_env() -> Self {
        SpotifyEndpoints {
            auth_url: config::spotify_apiauth_url(),
            token_url: config::spotify_apitoken_url(),
            api_url: config::spotify_apiurl(),
            scope: config::spotify_scope(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SpotifyClient {
    client: Client,
    credentials: Arc<Credentials>,
    endpoints: SpotifyEndpoints,
}

impl SpotifyClient {
    pub fn new(credentials: Arc<Credentials>, endpoints: SpotifyEndpoints) -> Self {
        SpotifyClient {
            client: Client::new(),
            credentials,
            endpoints,
        }
    }
}
