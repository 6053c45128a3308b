use apodtunes::{
    Error,
    management::{FileTokenStore, TokenStore},
    types::CachedToken,
};
use chrono::{Duration, SecondsFormat, Utc};
use serde_json::{Value, json};

fn token_expiring_in(duration: Duration) -> CachedToken {
    let expiration = (Utc::now() + duration).to_rfc3339_opts(SecondsFormat::Secs, true);
    CachedToken::from_payload(
        json!({
            "access_token": "abc",
            "token_type": "Bearer",
            "scope": "playlist-modify-public",
            "expiration": expiration
        }),
        Utc::now(),
    )
    .unwrap()
}

#[tokio::test]
async fn saved_token_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileTokenStore::new(dir.path().join("user-token.json"));

    let token = token_expiring_in(Duration::hours(1));
    store.save(&token).await.unwrap();

    let loaded = store.load().await.unwrap().unwrap();
    assert_eq!(loaded, token);
}

#[tokio::test]
async fn expired_token_loads_as_none() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileTokenStore::new(dir.path().join("user-token.json"));

    store
        .save(&token_expiring_in(Duration::hours(-1)))
        .await
        .unwrap();

    assert!(store.load().await.unwrap().is_none());
}

#[tokio::test]
async fn missing_file_loads_as_none() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileTokenStore::new(dir.path().join("user-token.json"));

    assert!(store.load().await.unwrap().is_none());
}

#[tokio::test]
async fn save_creates_parent_directories_and_overwrites() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("auth").join("user-token.json");
    let store = FileTokenStore::new(&path);

    store
        .save(&token_expiring_in(Duration::hours(1)))
        .await
        .unwrap();

    let newer = CachedToken::from_payload(
        json!({"access_token": "newer", "expires_in": 3600}),
        Utc::now(),
    )
    .unwrap();
    store.save(&newer).await.unwrap();

    let on_disk: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(on_disk["access_token"], "newer");
    assert_eq!(on_disk["expires_in"], 3600);
    assert!(on_disk["expiration"].is_string());
    assert_eq!(store.load().await.unwrap().unwrap().access_token, "newer");
}

#[tokio::test]
async fn payload_without_expiration_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("user-token.json");
    std::fs::write(&path, r#"{"access_token": "abc", "expires_in": 3600}"#).unwrap();

    let result = FileTokenStore::new(&path).load().await;
    assert!(matches!(result, Err(Error::MissingField("expiration"))));
}

#[tokio::test]
async fn corrupt_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("user-token.json");
    std::fs::write(&path, "not json").unwrap();

    let result = FileTokenStore::new(&path).load().await;
    assert!(matches!(result, Err(Error::Json(_))));
}
