use std::path::PathBuf;

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;
use tokio::sync::Mutex;

use crate::{
    Error,
    types::CachedToken,
    utils::{expiration_from_expires_in, parse_expiration},
};

const EXPIRATION_FIELD: &str = "expiration";

impl CachedToken {
    /// Builds a cacheable token from a fresh token endpoint response.
    ///
    /// An `expiration` already present in the payload is kept as is. Otherwise
    /// it is computed from `expires_in` relative to `now` and written into the
    /// payload, so the file on disk always carries an absolute expiry.
    pub fn from_payload(mut payload: Value, now: DateTime<Utc>) -> Result<Self, Error> {
        let access_token = payload
            .get("access_token")
            .and_then(Value::as_str)
            .filter(|t| !t.is_empty())
            .ok_or(Error::MissingField("access_token"))?
            .to_string();

        let expiration = match payload.get(EXPIRATION_FIELD).and_then(parse_expiration) {
            Some(expiration) => expiration,
            None => {
                let expiration = payload
                    .get("expires_in")
                    .and_then(|v| expiration_from_expires_in(now, v))
                    .ok_or(Error::MissingField("expires_in"))?;
                let object = payload
                    .as_object_mut()
                    .ok_or_else(|| Error::Upstream("token payload is not an object".to_string()))?;
                object.insert(
                    EXPIRATION_FIELD.to_string(),
                    Value::String(expiration.to_rfc3339_opts(SecondsFormat::Secs, true)),
                );
                expiration
            }
        };

        Ok(CachedToken {
            access_token,
            expiration,
            payload,
        })
    }

    /// Reads a token back from a stored payload. Unlike [`Self::from_payload`]
    /// the `expiration` field is required.
    pub fn from_stored(payload: Value) -> Result<Self, Error> {
        let access_token = payload
            .get("access_token")
            .and_then(Value::as_str)
            .ok_or(Error::MissingField("access_token"))?
            .to_string();
        let expiration = payload
            .get(EXPIRATION_FIELD)
            .and_then(parse_expiration)
            .ok_or(Error::MissingField(EXPIRATION_FIELD))?;

        Ok(CachedToken {
            access_token,
            expiration,
            payload,
        })
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expiration <= now
    }
}

/// Storage for the single cached access token.
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// Returns the cached token, or `None` if nothing is cached or the cached
    /// token has expired.
    async fn load(&self) -> Result<Option<CachedToken>, Error>;

    /// Replaces the cached token.
    async fn save(&self, token: &CachedToken) -> Result<(), Error>;
}

/// Token cache backed by a single JSON file, overwritten on every save.
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileTokenStore { path: path.into() }
    }
}

#[async_trait]
impl TokenStore for FileTokenStore {
    async fn load(&self) -> Result<Option<CachedToken>, Error> {
        let content = match async_fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(Error::Io(e)),
        };

        let payload: Value = serde_json::from_str(&content)?;
        let token = CachedToken::from_stored(payload)?;
        if token.is_expired(Utc::now()) {
            return Ok(None);
        }
        Ok(Some(token))
    }

    async fn save(&self, token: &CachedToken) -> Result<(), Error> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                async_fs::create_dir_all(parent).await?;
            }
        }

        let json = serde_json::to_string_pretty(&token.payload)?;
        async_fs::write(&self.path, json).await?;
        Ok(())
    }
}

/// In-memory token cache, used where nothing should touch the disk.
#[derive(Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<CachedToken>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: CachedToken) -> Self {
        MemoryTokenStore {
            token: Mutex::new(Some(token)),
        }
    }

    /// Returns whatever is stored, expired or not.
    pub async fn current_token(&self) -> Option<CachedToken> {
        self.token.lock().await.clone()
    }
}

#[async_trait]
impl TokenStore for MemoryTokenStore {
    async fn load(&self) -> Result<Option<CachedToken>, Error> {
        let lock = self.token.lock().await;
        Ok(lock.clone().filter(|t| !t.is_expired(Utc::now())))
    }

    async fn save(&self, token: &CachedToken) -> Result<(), Error> {
        let mut lock = self.token.lock().await;
        *lock = Some(token.clone());
        Ok(())
    }
}
