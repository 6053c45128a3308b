use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Astronomy Picture of the Day as returned by `/planetary/apod`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Apod {
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub explanation: String,
    #[serde(default = "default_media_type", deserialize_with = "null_as_image")]
    pub media_type: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub date: String,
    #[serde(default)]
    pub copyright: Option<String>,
}

fn default_media_type() -> String {
    "image".to_string()
}

// NASA sends explicit nulls for some fields on older entries.
fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_image<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_media_type))
}

impl Apod {
    pub fn is_video(&self) -> bool {
        self.media_type == "video"
    }
}

/// A single track search result, flattened for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub name: String,
    pub artist_names: Vec<String>,
    pub external_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub tracks: TrackPage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackPage {
    pub items: Vec<TrackItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackItem {
    pub name: String,
    #[serde(default)]
    pub artists: Vec<TrackArtist>,
    pub external_urls: ExternalUrls,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackArtist {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExternalUrls {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub spotify: String,
}

impl From<TrackItem> for Track {
    fn from(item: TrackItem) -> Self {
        Track {
            name: item.name,
            artist_names: item.artists.into_iter().map(|a| a.name).collect(),
            external_url: item.external_urls.spotify,
        }
    }
}

/// The cached OAuth access token.
///
/// `payload` is the token response exactly as the provider returned it, plus
/// an absolute `expiration` field. It is what gets written to disk.
#[derive(Debug, Clone, PartialEq)]
pub struct CachedToken {
    pub access_token: String,
    pub expiration: DateTime<Utc>,
    pub payload: Value,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn apod_tolerates_null_fields() {
        let apod: Apod = serde_json::from_value(json!({
            "title": "Pillars of Creation",
            "url": null,
            "explanation": null,
            "media_type": null,
            "date": null,
            "copyright": null
        }))
        .unwrap();

        assert_eq!(apod.title, "Pillars of Creation");
        assert_eq!(apod.url, "");
        assert_eq!(apod.explanation, "");
        assert_eq!(apod.media_type, "image");
        assert!(apod.copyright.is_none());
    }

    #[test]
    fn apod_defaults_missing_fields() {
        let apod: Apod = serde_json::from_value(json!({"title": "M31"})).unwrap();

        assert_eq!(apod.url, "");
        assert!(!apod.is_video());
    }
}
