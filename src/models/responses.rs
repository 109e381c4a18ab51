//! Response DTOs for the photo gateway API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;
use serde_json::Value;

use crate::cache::CacheStats;
use crate::models::{Manifest, Photo};
use crate::pagination::SolBounds;

/// Response body for `GET /api/index`
#[derive(Debug, Clone, Serialize)]
pub struct IndexResponse {
    pub page: &'static str,
    pub manifests: Vec<Manifest>,
}

impl IndexResponse {
    pub fn new(manifests: Vec<Manifest>) -> Self {
        Self {
            page: "index",
            manifests,
        }
    }
}

/// Response body for `GET /api/apod`
#[derive(Debug, Clone, Serialize)]
pub struct ApodResponse {
    pub page: &'static str,
    /// Upstream picture-of-the-day payload, passed through untouched
    pub apod: Value,
}

impl ApodResponse {
    pub fn new(apod: Value) -> Self {
        Self { page: "apod", apod }
    }
}

/// One page of photos for a rover and sol; this is the cached record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoverPage {
    pub page: &'static str,
    pub rover: String,
    pub photos: Vec<Photo>,
    pub next_skip: i64,
    /// Raw previous cursor, negative on the first page
    pub prev_skip: i64,
    pub has_earlier_images: bool,
    pub has_later_images: bool,
}

/// Response body for `GET /api/rovers/:rover[/:sol[/:skip]]`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoverResponse {
    #[serde(flatten)]
    pub page: RoverPage,
    pub header: SolBounds,
}

/// Counters of one memoized operation
#[derive(Debug, Clone, Serialize)]
pub struct CacheReport {
    pub hits: u64,
    pub misses: u64,
    pub failures: u64,
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl From<CacheStats> for CacheReport {
    fn from(stats: CacheStats) -> Self {
        Self {
            hit_rate: stats.hit_rate(),
            hits: stats.hits,
            misses: stats.misses,
            failures: stats.failures,
            total_entries: stats.total_entries,
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub manifests: CacheReport,
    pub photos: CacheReport,
}

impl StatsResponse {
    pub fn new(manifests: CacheStats, photos: CacheStats) -> Self {
        Self {
            manifests: manifests.into(),
            photos: photos.into(),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
