//! Upstream payloads of the Mars rover photo API.
//!
//! Only the fields the gateway uses are modelled; unknown fields are ignored.

use serde::{Deserialize, Serialize};

/// Body of `/manifests/{rover}`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ManifestEnvelope {
    pub photo_manifest: Manifest,
}

/// Mission manifest of a single rover.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Manifest {
    pub name: String,
    pub landing_date: String,
    pub launch_date: String,
    pub status: String,
    pub max_sol: u32,
    pub max_date: String,
    pub total_photos: u64,
    /// Per-sol photo counts; never sent to clients
    #[serde(default, skip_serializing)]
    pub photos: Vec<SolSummary>,
}

/// Photo count of one sol within a manifest.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SolSummary {
    pub sol: u32,
    #[serde(default)]
    pub earth_date: String,
    pub total_photos: u64,
    #[serde(default)]
    pub cameras: Vec<String>,
}

/// Body of `/rovers/{rover}/photos`.
#[derive(Debug, Clone, Deserialize)]
pub struct PhotosEnvelope {
    pub photos: Vec<Photo>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Photo {
    pub id: u64,
    pub sol: u32,
    pub img_src: String,
    pub earth_date: String,
    pub camera: Camera,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rover: Option<PhotoRover>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Camera {
    pub name: String,
    pub full_name: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PhotoRover {
    pub name: String,
    #[serde(default)]
    pub status: String,
}
