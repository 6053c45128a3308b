//! # API Module
//!
//! HTTP handlers for the APOD Tunes server.
//!
//! ## Endpoints
//!
//! Requests are routed by [`dispatch`] on the request target alone, whatever
//! the method: `/` must match exactly (no query string), the other routes match
//! on path prefix, so `/search/x?date=` still reaches the search handler.
//!
//! - [`home`] - `GET /`, serves the static home page
//! - [`authorize`] - `GET /authorize`, redirects to Spotify's login page
//! - [`callback`] - `GET /callback?code=`, completes the authorization code
//!   flow and caches the access token
//! - [`search`] - `GET /search?date=`, pairs the picture of the day with
//!   Spotify tracks
//! - [`not_found`] - fallback for every other path
//!
//! ## Error Responses
//!
//! Handlers return [`ApiError`] for every outcome other than success:
//!
//! | Case                                | Status | Body / Location                    |
//! |-------------------------------------|--------|------------------------------------|
//! | missing `code`                      | 400    | `Authorization code is missing.`   |
//! | missing `date`                      | 400    | `Date is required.`                |
//! | token exchange failed               | 500    | `Failed to fetch access token.`    |
//! | NASA fetch failed                   | 500    | `Failed to fetch NASA data.`       |
//! | Spotify search failed               | 500    | `Failed to fetch Spotify tracks.`  |
//! | no valid cached token               | 302    | `/authorize`                       |
//! | unknown path                        | 404    | `404 Not Found`                    |
//!
//! Upstream failures are logged with their cause and then collapsed into the
//! single message for that upstream.

mod authorize;
mod callback;
mod dispatch;
mod error;
mod home;
mod search;

use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

pub use authorize::authorize;
pub use callback::callback;
pub use dispatch::{Route, dispatch};
pub use error::ApiError;
pub use home::{home, not_found};
pub use search::search;

/// `302 Found` pointing at `location`.
pub fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
}
