//! Data models for the photo gateway
//!
//! Upstream payloads as decoded from the NASA API, and the JSON bodies the
//! gateway sends back to its clients.

pub mod responses;
pub mod upstream;

// Re-export commonly used types
pub use responses::{
    ApodResponse, CacheReport, HealthResponse, IndexResponse, RoverPage, RoverResponse,
    StatsResponse,
};
pub use upstream::{Camera, Manifest, ManifestEnvelope, Photo, PhotoRover, PhotosEnvelope, SolSummary};
