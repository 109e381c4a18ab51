//! HTTP client for the NASA open APIs.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::UpstreamError;
use crate::models::{Manifest, ManifestEnvelope, Photo, PhotosEnvelope};
use crate::upstream::PhotoProvider;

/// [`PhotoProvider`] backed by `api.nasa.gov`.
///
/// Holds a pooled `reqwest::Client`; cloning shares the pool.
#[derive(Debug, Clone)]
pub struct NasaClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl NasaClient {
    /// Creates a client for `base_url` with a per-request timeout.
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, UpstreamError> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, UpstreamError> {
        Self::new(
            config.nasa_api_url.clone(),
            config.nasa_api_key.clone(),
            Duration::from_secs(config.upstream_timeout_secs),
        )
    }

    /// GETs `path` with the API key appended and decodes a JSON body.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, UpstreamError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%path, "upstream request");

        let response = self
            .http
            .get(&url)
            .query(query)
            .query(&[("api_key", &self.api_key)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(%path, status = status.as_u16(), "upstream returned error status");
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                path: path.to_string(),
            });
        }

        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl PhotoProvider for NasaClient {
    async fn fetch_manifest(&self, rover: &str) -> Result<Manifest, UpstreamError> {
        let path = format!("/mars-photos/api/v1/manifests/{rover}");
        let envelope: ManifestEnvelope = self.get_json(&path, &[]).await?;
        Ok(envelope.photo_manifest)
    }

    async fn fetch_photos(&self, rover: &str, sol: u32) -> Result<Vec<Photo>, UpstreamError> {
        let path = format!("/mars-photos/api/v1/rovers/{rover}/photos");
        let envelope: PhotosEnvelope = self.get_json(&path, &[("sol", sol.to_string())]).await?;
        Ok(envelope.photos)
    }

    async fn fetch_apod(&self) -> Result<Value, UpstreamError> {
        self.get_json("/planetary/apod", &[]).await
    }
}
