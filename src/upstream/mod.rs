//! Upstream Module
//!
//! The asynchronous data source the gateway fronts, and its HTTP implementation.

mod memory;
mod nasa;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::UpstreamError;
use crate::models::{Manifest, Photo};

pub use memory::InMemoryProvider;
pub use nasa::NasaClient;

// == Photo Provider ==
/// Source of rover manifests and photo listings.
///
/// Implementations are opaque to the cache: every call either yields a
/// decoded payload or an [`UpstreamError`].
#[async_trait]
pub trait PhotoProvider: Send + Sync {
    /// Mission manifest of `rover`.
    async fn fetch_manifest(&self, rover: &str) -> Result<Manifest, UpstreamError>;

    /// All photos taken by `rover` on `sol`, in upstream order.
    async fn fetch_photos(&self, rover: &str, sol: u32) -> Result<Vec<Photo>, UpstreamError>;

    /// Astronomy picture of the day, as raw JSON.
    async fn fetch_apod(&self) -> Result<Value, UpstreamError>;
}
