use std::sync::Arc;

use axum::{
    Extension,
    http::{Uri, header},
    response::{IntoResponse, Response},
};

use super::ApiError;
use crate::{info, server::AppState, warning};

/// Serves the home page bytes untouched.
pub async fn home(Extension(state): Extension<Arc<AppState>>) -> Result<Response, ApiError> {
    info!("Serving the home page.");
    match async_fs::read(&state.home_page).await {
        Ok(page) => Ok(([(header::CONTENT_TYPE, "text/html")], page).into_response()),
        Err(e) => {
            warning!("Cannot read {}: {}", state.home_page.display(), e);
            Err(ApiError::HomePageUnavailable)
        }
    }
}

pub async fn not_found(uri: Uri) -> ApiError {
    info!("404 Not Found for URL: {}", uri);
    ApiError::NotFound
}
