//! # Spotify Integration Module
//!
//! Thin client for the three Spotify Web API calls a top-tracks lookup needs:
//!
//! ```text
//! Pipeline (crate::pipeline)
//!          ↓
//! SpotifyApi trait
//!     ├── auth     POST /api/token          (client-credentials grant)
//!     ├── artists  GET  /search?type=artist (first match wins)
//!     └── tracks   GET  /artists/{id}/top-tracks
//!          ↓
//! HTTP Layer (reqwest, JSON)
//! ```
//!
//! Every call is made exactly once. There is no retry, no rate-limit handling
//! and no token cache; a lookup authenticates afresh each time.
//!
//! The [`SpotifyApi`] trait is the seam the pipeline is written against. With
//! the `mock` feature (or under `cfg(test)`) a `MockSpotifyApi` is generated by
//! `mockall`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::{
    config::Endpoints,
    error::{AuthError, TransportError},
    types::{AccessToken, Artist, Credentials, Track},
};

pub mod artists;
pub mod auth;
pub mod tracks;

/// The operations a lookup performs against the music catalog.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait SpotifyApi: Send + Sync {
    /// Exchanges application credentials for a bearer token.
    async fn authenticate(&self, credentials: &Credentials) -> Result<AccessToken, AuthError>;

    /// Returns the first artist matching `name`, or `None` when the search is empty.
    async fn resolve_artist(
        &self,
        name: &str,
        token: &AccessToken,
    ) -> Result<Option<Artist>, TransportError>;

    /// Returns the artist's top tracks in the order the service lists them.
    async fn fetch_top_tracks(
        &self,
        artist_id: &str,
        token: &AccessToken,
    ) -> Result<Vec<Track>, TransportError>;
}

/// [`SpotifyApi`] over HTTP.
#[derive(Debug, Clone)]
pub struct SpotifyClient {
    http: Client,
    endpoints: Endpoints,
}

impl SpotifyClient {
    pub fn new(endpoints: Endpoints) -> Self {
        Self {
            http: Client::new(),
            endpoints,
        }
    }

    /// Builds a client whose requests give up after `timeout`.
    ///
    /// `None` keeps the transport default, which never times out.
    pub fn with_timeout(
        endpoints: Endpoints,
        timeout: Option<Duration>,
    ) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            endpoints,
        })
    }
}

#[async_trait]
impl SpotifyApi for SpotifyClient {
    async fn authenticate(&self, credentials: &Credentials) -> Result<AccessToken, AuthError> {
        auth::request_token(&self.http, &self.endpoints.token_url, credentials).await
    }

    async fn resolve_artist(
        &self,
        name: &str,
        token: &AccessToken,
    ) -> Result<Option<Artist>, TransportError> {
        artists::search_artist(&self.http, &self.endpoints.api_url, name, token).await
    }

    async fn fetch_top_tracks(
        &self,
        artist_id: &str,
        token: &AccessToken,
    ) -> Result<Vec<Track>, TransportError> {
        tracks::get_top_tracks(&self.http, &self.endpoints.api_url, artist_id, token).await
    }
}

/// Sends an authorized GET and decodes the JSON body.
///
/// Non-2xx statuses and bodies that do not match `T` both become a
/// [`TransportError`]; the latter keeps the status so callers can tell them apart.
pub(crate) async fn get_json<T: DeserializeOwned>(
    http: &Client,
    url: &str,
    query: &[(&str, &str)],
    token: &AccessToken,
) -> Result<T, TransportError> {
    let response = http
        .get(url)
        .query(query)
        .bearer_auth(token.as_str())
        .send()
        .await?;

    let status = response.status();
    log::debug!("GET {} -> {}", url, status);
    if !status.is_success() {
        return Err(TransportError::from_status(status));
    }

    response.json::<T>().await.map_err(|e| {
        TransportError::new(
            Some(status.as_u16()),
            format!("malformed response body: {}", e),
        )
    })
}
