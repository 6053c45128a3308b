use reqwest::StatusCode;

use super::SpotifyClient;
use crate::{
    Error,
    types::{SearchResponse, Track},
};

impl SpotifyClient {
    /// Searches tracks matching `query`, in the order Spotify ranks them.
    pub async fn search_tracks(&self, access_token: &str, query: &str) -> Result<Vec<Track>, Error> {
        let api_url = format!(
            "{uri}/search",
            uri = self.endpoints.api_url.trim_end_matches('/')
        );

        let response = self
            .client
            .get(&api_url)
            .query(&[("type", "track"), ("q", query)])
            .bearer_auth(access_token)
            .send()
            .await?;

        if response.status() == StatusCode::UNAUTHORIZED {
            return Err(Error::Unauthorized);
        }

        let res = response.error_for_status()?.json::<SearchResponse>().await?;

        Ok(res.tracks.items.into_iter().map(Track::from).collect())
    }
}
