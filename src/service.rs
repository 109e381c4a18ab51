//! Rover Service
//!
//! Owns the upstream provider and the two memoized operations in front of
//! it: manifests and photo pages. Route handlers only talk to this type.

use std::sync::Arc;
use std::time::Duration;

use futures::future::try_join_all;
use serde_json::Value;
use tracing::{debug, info};

use crate::cache::Memoized;
use crate::config::{Config, ROVERS};
use crate::error::{AppError, Result, UpstreamError};
use crate::models::{Manifest, RoverPage, RoverResponse, StatsResponse};
use crate::pagination::{PageRequest, SolBounds};
use crate::upstream::PhotoProvider;

/// Manifest fetch keyed by rover name.
pub type ManifestCache = Memoized<String, Manifest, UpstreamError>;

/// Photo page keyed by `(rover, sol, skip, limit)`.
pub type PageCache = Memoized<(String, u32, u32, u32), RoverPage, AppError>;

// == Rover Service ==
pub struct RoverService {
    provider: Arc<dyn PhotoProvider>,
    manifests: ManifestCache,
    pages: PageCache,
    photo_limit: u32,
}

impl RoverService {
    // == Constructor ==
    /// Creates the service with one independent cache per operation.
    pub fn new(
        provider: Arc<dyn PhotoProvider>,
        manifest_ttl: Duration,
        photos_ttl: Duration,
        photo_limit: u32,
    ) -> Self {
        let source = Arc::clone(&provider);
        let manifests = Memoized::new(
            "manifests",
            move |rover: String| {
                let source = Arc::clone(&source);
                async move { source.fetch_manifest(&rover).await }
            },
            manifest_ttl,
        );

        let source = Arc::clone(&provider);
        let pages = Memoized::new(
            "photos",
            move |(rover, sol, skip, limit): (String, u32, u32, u32)| {
                let source = Arc::clone(&source);
                async move { load_page(source.as_ref(), rover, sol, skip, limit).await }
            },
            photos_ttl,
        );

        Self {
            provider,
            manifests,
            pages,
            photo_limit,
        }
    }

    pub fn from_config(provider: Arc<dyn PhotoProvider>, config: &Config) -> Self {
        Self::new(
            provider,
            config.manifest_ttl(),
            config.photos_ttl(),
            config.photo_limit,
        )
    }

    pub fn photo_limit(&self) -> u32 {
        self.photo_limit
    }

    // == Manifest ==
    /// Cached manifest of one rover.
    pub async fn manifest(&self, rover: &str) -> Result<Manifest> {
        Ok(self.manifests.call(rover.to_string()).await?)
    }

    // == Manifests ==
    /// Cached manifests of every known rover, fetched concurrently.
    ///
    /// Fails as a whole if any single manifest fails.
    pub async fn manifests(&self) -> Result<Vec<Manifest>> {
        let fetches = ROVERS.into_iter().map(|rover| self.manifest(rover));
        try_join_all(fetches).await
    }

    // == Rover Page ==
    /// One page of photos for `rover`.
    ///
    /// `sol` defaults to the rover's latest sol and `skip` to the first page.
    pub async fn rover_page(
        &self,
        rover: &str,
        sol: Option<u32>,
        skip: Option<u32>,
    ) -> Result<RoverResponse> {
        let rover = rover.to_lowercase();
        if !ROVERS.contains(&rover.as_str()) {
            return Err(AppError::NotFound(format!("unknown rover '{rover}'")));
        }

        let max_sol = self.manifest(&rover).await?.max_sol;
        let sol = sol.unwrap_or(max_sol);
        let skip = skip.unwrap_or(0);
        debug!(%rover, sol, skip, max_sol, "rover page requested");

        let page = self.pages.call((rover, sol, skip, self.photo_limit)).await?;
        Ok(RoverResponse {
            page,
            header: SolBounds::new(sol, max_sol),
        })
    }

    // == APOD ==
    /// Astronomy picture of the day; not cached.
    pub async fn apod(&self) -> Result<Value> {
        Ok(self.provider.fetch_apod().await?)
    }

    // == Stats ==
    pub async fn stats(&self) -> StatsResponse {
        StatsResponse::new(self.manifests.stats().await, self.pages.stats().await)
    }

    // == Purge Expired ==
    /// Drops stale entries from both caches.
    pub async fn purge_expired(&self) -> usize {
        let removed = self.manifests.purge_expired().await + self.pages.purge_expired().await;
        if removed > 0 {
            info!(removed, "purged expired cache entries");
        }
        removed
    }
}

/// Fetches every photo of a sol and cuts out one page, newest id first.
async fn load_page(
    provider: &dyn PhotoProvider,
    rover: String,
    sol: u32,
    skip: u32,
    limit: u32,
) -> Result<RoverPage> {
    let mut photos = provider.fetch_photos(&rover, sol).await?;
    photos.sort_by(|a, b| b.id.cmp(&a.id));

    let window = PageRequest::new(photos.len(), skip, limit)?.window();
    let visible = window.slice(&photos).to_vec();

    Ok(RoverPage {
        page: "rover",
        rover,
        photos: visible,
        next_skip: window.next_skip,
        prev_skip: window.prev_skip,
        has_earlier_images: window.has_earlier,
        has_later_images: window.has_later,
    })
}
