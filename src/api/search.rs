use std::{collections::HashMap, sync::Arc};

use axum::{Extension, extract::Query, response::Html};

use super::ApiError;
use crate::{Error, info, render, server::AppState, utils, warning};

/// Fetches the picture of the day, searches Spotify for its title and renders
/// both. Each stage either yields its value or ends the request.
pub async fn search(
    Query(params): Query<HashMap<String, String>>,
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Html<String>, ApiError> {
    let Some(date) = utils::required_param(&params, "date") else {
        return Err(ApiError::MissingDate);
    };
    info!("Handling NASA search for date: {}", date);

    let apod = state.nasa.fetch_apod(date).await.map_err(|e| {
        warning!("Error fetching NASA API data: {}", e);
        ApiError::NasaUnavailable
    })?;

    let token = match state.tokens.load().await {
        Ok(Some(token)) => token,
        Ok(None) => {
            info!("No valid Spotify token cached, redirecting to authorization.");
            return Err(ApiError::AuthorizationRequired);
        }
        Err(e) => {
            warning!("Cannot read cached Spotify token: {}", e);
            return Err(ApiError::AuthorizationRequired);
        }
    };

    let tracks = match state.spotify.search_tracks(&token.access_token, &apod.title).await {
        Ok(tracks) => tracks,
        Err(Error::Unauthorized) => {
            warning!("Spotify rejected the cached token, redirecting to authorization.");
            return Err(ApiError::AuthorizationRequired);
        }
        Err(e) => {
            warning!("Error searching Spotify tracks: {}", e);
            return Err(ApiError::SpotifyUnavailable);
        }
    };

    info!("Generated HTML response with {} tracks.", tracks.len());
    Ok(Html(render::render_results(&apod, &tracks)))
}
