use std::{collections::HashMap, sync::Arc};

use axum::{
    Extension,
    extract::Query,
    response::Response,
};
use chrono::Utc;

use super::{ApiError, found};
use crate::{info, server::AppState, success, types::CachedToken, utils, warning};

pub async fn callback(
    Query(params): Query<HashMap<String, String>>,
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Response, ApiError> {
    let Some(code) = utils::required_param(&params, "code") else {
        return Err(ApiError::MissingCode);
    };

    info!("Exchanging authorization code for an access token...");
    let payload = match state.spotify.exchange_code(code).await {
        Ok(payload) => payload,
        Err(e) => {
            warning!("Error fetching Spotify token: {}", e);
            return Err(ApiError::TokenExchangeFailed);
        }
    };

    let token = match CachedToken::from_payload(payload, Utc::now()) {
        Ok(token) => token,
        Err(e) => {
            warning!("Unusable Spotify token response: {}", e);
            return Err(ApiError::TokenExchangeFailed);
        }
    };

    if let Err(e) = state.tokens.save(&token).await {
        warning!("Failed to save token to cache: {}", e);
        return Err(ApiError::TokenCacheFailed);
    }
    success!("Spotify token cached successfully.");

    Ok(found("/"))
}
