use std::{collections::HashMap, sync::Arc};

use axum::{
    Extension,
    extract::Query,
    http::Uri,
    response::{IntoResponse, Response},
};

use super::{authorize, callback, home, not_found, search};
use crate::server::AppState;

/// Where a request goes. Only the request target decides, never the method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Authorize,
    Callback,
    Search,
    NotFound,
}

impl Route {
    /// `/` must match the whole target, query string included. The other
    /// routes match on path prefix.
    pub fn resolve(uri: &Uri) -> Self {
        let path = uri.path();
        if path == "/" && uri.query().is_none() {
            Route::Home
        } else if path.starts_with("/authorize") {
            Route::Authorize
        } else if path.starts_with("/callback") {
            Route::Callback
        } else if path.starts_with("/search") {
            Route::Search
        } else {
            Route::NotFound
        }
    }
}

pub async fn dispatch(Extension(state): Extension<Arc<AppState>>, uri: Uri) -> Response {
    match Route::resolve(&uri) {
        Route::Home => home(Extension(state)).await.into_response(),
        Route::Authorize => authorize(Extension(state)).await.into_response(),
        Route::Callback => callback(query_params(&uri), Extension(state))
            .await
            .into_response(),
        Route::Search => search(query_params(&uri), Extension(state))
            .await
            .into_response(),
        Route::NotFound => not_found(uri).await.into_response(),
    }
}

// A query string that cannot be decoded is handled like an absent one.
fn query_params(uri: &Uri) -> Query<HashMap<String, String>> {
    Query::try_from_uri(uri).unwrap_or_else(|_| Query(HashMap::new()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(target: &str) -> Route {
        Route::resolve(&target.parse::<Uri>().unwrap())
    }

    #[test]
    fn home_requires_exact_target() {
        assert_eq!(route("/"), Route::Home);
        assert_eq!(route("/?x=1"), Route::NotFound);
        assert_eq!(route("/index.html"), Route::NotFound);
    }

    #[test]
    fn other_routes_match_by_prefix() {
        assert_eq!(route("/authorize"), Route::Authorize);
        assert_eq!(route("/authorizeme"), Route::Authorize);
        assert_eq!(route("/callback/?code=abc"), Route::Callback);
        assert_eq!(route("/callbackfoo"), Route::Callback);
        assert_eq!(route("/search?date=2024-12-18"), Route::Search);
        assert_eq!(route("/search/x?date=2024-12-18"), Route::Search);
    }

    #[test]
    fn unknown_targets_are_not_found() {
        assert_eq!(route("/nope"), Route::NotFound);
        assert_eq!(route("/api/token"), Route::NotFound);
        assert_eq!(route("/Search"), Route::NotFound);
    }
}
