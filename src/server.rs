use axum::{
    Extension, Router,
    extract::Request,
    middleware::{self, Next},
    response::Response,
};
use std::{net::SocketAddr, path::PathBuf, str::FromStr, sync::Arc};

use crate::{
    Res, api,
    config::{self, Credentials},
    management::{FileTokenStore, TokenStore},
    nasa::NasaClient,
    spotify::{SpotifyClient, SpotifyEndpoints},
    info, success,
};

/// Everything the handlers share. Built once at startup.
pub struct AppState {
    pub nasa: NasaClient,
    pub spotify: SpotifyClient,
    pub tokens: Arc<dyn TokenStore>,
    pub home_page: PathBuf,
}

impl AppState {
    /// Production wiring: endpoints from the environment and a file token cache.
    pub fn from_config(
        credentials: Arc<Credentials>,
        token_path: impl Into<PathBuf>,
        home_page: impl Into<PathBuf>,
    ) -> Self {
        AppState {
            nasa: NasaClient::new(config::nasa_apiurl(), credentials.nasa_api_key.clone()),
            spotify: SpotifyClient::new(credentials, SpotifyEndpoints::from_env()),
            tokens: Arc::new(FileTokenStore::new(token_path)),
            home_page: home_page.into(),
        }
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .fallback(api::dispatch)
        .layer(Extension(state))
        .layer(middleware::from_fn(log_request))
}

async fn log_request(request: Request, next: Next) -> Response {
    info!("New request for {}", request.uri());
    next.run(request).await
}

pub async fn start_api_server(addr: &str, state: Arc<AppState>) -> Res<()> {
    let addr = SocketAddr::from_str(addr)?;
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    success!("Server running at http://{}", listener.local_addr()?);
    axum::serve(listener, router(state)).await?;
    Ok(())
}
