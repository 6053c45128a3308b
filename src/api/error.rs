use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

/// Every way a request can end other than with a rendered page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiError {
    MissingCode,
    MissingDate,
    TokenExchangeFailed,
    TokenCacheFailed,
    NasaUnavailable,
    SpotifyUnavailable,
    HomePageUnavailable,
    AuthorizeUnavailable,
    /// No usable access token: send the browser through authorization again.
    AuthorizationRequired,
    NotFound,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingCode | ApiError::MissingDate => StatusCode::BAD_REQUEST,
            ApiError::AuthorizationRequired => StatusCode::FOUND,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ApiError::MissingCode => "Authorization code is missing.",
            ApiError::MissingDate => "Date is required.",
            ApiError::TokenExchangeFailed => "Failed to fetch access token.",
            ApiError::TokenCacheFailed => "Failed to cache access token.",
            ApiError::NasaUnavailable => "Failed to fetch NASA data.",
            ApiError::SpotifyUnavailable => "Failed to fetch Spotify tracks.",
            ApiError::HomePageUnavailable => "Failed to load home page.",
            ApiError::AuthorizeUnavailable => "Failed to build authorization URL.",
            ApiError::AuthorizationRequired => "",
            ApiError::NotFound => "404 Not Found",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::AuthorizationRequired => {
                (self.status(), [(header::LOCATION, "/authorize")]).into_response()
            }
            _ => (self.status(), self.message()).into_response(),
        }
    }
}
