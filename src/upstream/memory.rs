//! In-process provider serving fixed data.
//!
//! Counts upstream calls and can be told to fail the next N calls, which
//! makes cache behaviour observable without a network.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, AtomicUsize, Ordering};

use async_trait::async_trait;
use serde_json::Value;

use crate::error::UpstreamError;
use crate::models::{Manifest, Photo};
use crate::upstream::PhotoProvider;

#[derive(Debug, Default)]
pub struct InMemoryProvider {
    manifests: HashMap<String, Manifest>,
    photos: HashMap<(String, u32), Vec<Photo>>,
    apod: Option<Value>,
    pending_failures: AtomicU32,
    manifest_calls: AtomicUsize,
    photo_calls: AtomicUsize,
    apod_calls: AtomicUsize,
}

impl InMemoryProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the manifest of `rover`.
    pub fn with_manifest(mut self, rover: &str, manifest: Manifest) -> Self {
        self.manifests.insert(rover.to_string(), manifest);
        self
    }

    /// Registers the photos of `rover` on `sol`.
    pub fn with_photos(mut self, rover: &str, sol: u32, photos: Vec<Photo>) -> Self {
        self.photos.insert((rover.to_string(), sol), photos);
        self
    }

    pub fn with_apod(mut self, apod: Value) -> Self {
        self.apod = Some(apod);
        self
    }

    /// Makes the next `count` calls, of any kind, fail with a 503.
    pub fn fail_next(&self, count: u32) {
        self.pending_failures.store(count, Ordering::SeqCst);
    }

    pub fn manifest_calls(&self) -> usize {
        self.manifest_calls.load(Ordering::SeqCst)
    }

    pub fn photo_calls(&self) -> usize {
        self.photo_calls.load(Ordering::SeqCst)
    }

    pub fn apod_calls(&self) -> usize {
        self.apod_calls.load(Ordering::SeqCst)
    }

    fn check_failure(&self, path: &str) -> Result<(), UpstreamError> {
        let failing = self
            .pending_failures
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if failing {
            return Err(UpstreamError::Status {
                status: 503,
                path: path.to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl PhotoProvider for InMemoryProvider {
    async fn fetch_manifest(&self, rover: &str) -> Result<Manifest, UpstreamError> {
        self.manifest_calls.fetch_add(1, Ordering::SeqCst);
        let path = format!("/manifests/{rover}");
        self.check_failure(&path)?;
        self.manifests
            .get(rover)
            .cloned()
            .ok_or(UpstreamError::Status { status: 404, path })
    }

    async fn fetch_photos(&self, rover: &str, sol: u32) -> Result<Vec<Photo>, UpstreamError> {
        self.photo_calls.fetch_add(1, Ordering::SeqCst);
        self.check_failure(&format!("/rovers/{rover}/photos"))?;
        // Upstream answers an unknown sol with an empty listing.
        Ok(self
            .photos
            .get(&(rover.to_string(), sol))
            .cloned()
            .unwrap_or_default())
    }

    async fn fetch_apod(&self) -> Result<Value, UpstreamError> {
        self.apod_calls.fetch_add(1, Ordering::SeqCst);
        self.check_failure("/planetary/apod")?;
        Ok(self.apod.clone().unwrap_or(Value::Null))
    }
}
