use std::sync::Arc;

use axum::{Extension, response::Response};

use super::{ApiError, found};
use crate::{info, server::AppState, warning};

pub async fn authorize(Extension(state): Extension<Arc<AppState>>) -> Result<Response, ApiError> {
    let auth_url = state.spotify.authorize_url().map_err(|e| {
        warning!("Cannot build Spotify authorization URL: {}", e);
        ApiError::AuthorizeUnavailable
    })?;

    info!("Redirecting user to Spotify OAuth login page...");
    Ok(found(&auth_url))
}
