//! API Handlers
//!
//! HTTP request handlers for each gateway endpoint.

use std::sync::Arc;

use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::{header, HeaderName},
    Json,
};
use serde::Deserialize;

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::models::{ApodResponse, HealthResponse, IndexResponse, RoverResponse, StatsResponse};
use crate::service::RoverService;
use crate::upstream::PhotoProvider;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<RoverService>,
}

impl AppState {
    pub fn new(service: RoverService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }

    /// Creates the state from configuration and an upstream provider.
    pub fn from_config(provider: Arc<dyn PhotoProvider>, config: &Config) -> Self {
        Self::new(RoverService::from_config(provider, config))
    }
}

/// `Location` of the client-side page plus the CORS header exposing it.
pub type LocationHeaders = [(HeaderName, String); 2];

fn location(path: impl Into<String>) -> LocationHeaders {
    [
        (header::LOCATION, path.into()),
        (header::ACCESS_CONTROL_EXPOSE_HEADERS, "Location".to_string()),
    ]
}

/// Path parameters of the rover routes; `sol` and `skip` are optional segments.
#[derive(Debug, Deserialize)]
pub struct RoverParams {
    pub rover: String,
    #[serde(default)]
    pub sol: Option<u32>,
    #[serde(default)]
    pub skip: Option<u32>,
}

/// Handler for GET /api/index
///
/// Returns the manifest of every rover.
pub async fn index_handler(
    State(state): State<AppState>,
) -> Result<(LocationHeaders, Json<IndexResponse>)> {
    let manifests = state.service.manifests().await?;
    Ok((location("/"), Json(IndexResponse::new(manifests))))
}

/// Handler for GET /api/apod
pub async fn apod_handler(
    State(state): State<AppState>,
) -> Result<(LocationHeaders, Json<ApodResponse>)> {
    let apod = state.service.apod().await?;
    Ok((location("/apod"), Json(ApodResponse::new(apod))))
}

/// Handler for GET /api/rovers/:rover[/:sol[/:skip]]
///
/// Returns one page of photos plus sol navigation flags.
pub async fn rover_handler(
    State(state): State<AppState>,
    params: std::result::Result<Path<RoverParams>, PathRejection>,
) -> Result<(LocationHeaders, Json<RoverResponse>)> {
    let Path(params) = params.map_err(|e| AppError::InvalidRequest(e.body_text()))?;

    let page = state
        .service
        .rover_page(&params.rover, params.sol, params.skip)
        .await?;

    Ok((location(format!("/{}", page.page.rover)), Json(page)))
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(state.service.stats().await)
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::models::Manifest;
    use crate::upstream::InMemoryProvider;

    fn state(provider: InMemoryProvider) -> AppState {
        AppState::new(RoverService::new(
            Arc::new(provider),
            Duration::from_secs(300),
            Duration::from_secs(120),
            25,
        ))
    }

    fn manifest(name: &str, max_sol: u32) -> Manifest {
        Manifest {
            name: name.to_string(),
            landing_date: "2012-08-06".to_string(),
            launch_date: "2011-11-26".to_string(),
            status: "active".to_string(),
            max_sol,
            max_date: "2024-02-19".to_string(),
            total_photos: 0,
            photos: vec![],
        }
    }

    #[tokio::test]
    async fn test_rover_handler_sets_location() {
        let state = state(InMemoryProvider::new().with_manifest("curiosity", manifest("Curiosity", 42)));
        let params = RoverParams {
            rover: "curiosity".to_string(),
            sol: None,
            skip: None,
        };

        let (headers, Json(body)) = rover_handler(State(state), Ok(Path(params))).await.unwrap();

        assert_eq!(headers[0], (header::LOCATION, "/curiosity".to_string()));
        assert_eq!(headers[1].1, "Location");
        assert_eq!(body.header.sol, 42);
        assert!(!body.header.has_later_sol);
    }

    #[tokio::test]
    async fn test_rover_handler_unknown_rover() {
        let state = state(InMemoryProvider::new());
        let params = RoverParams {
            rover: "sojourner".to_string(),
            sol: None,
            skip: None,
        };

        let result = rover_handler(State(state), Ok(Path(params))).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_index_handler() {
        let state = state(
            InMemoryProvider::new()
                .with_manifest("curiosity", manifest("Curiosity", 1))
                .with_manifest("opportunity", manifest("Opportunity", 2))
                .with_manifest("spirit", manifest("Spirit", 3)),
        );

        let (headers, Json(body)) = index_handler(State(state)).await.unwrap();

        assert_eq!(headers[0].1, "/");
        assert_eq!(body.page, "index");
        assert_eq!(body.manifests.len(), 3);
    }

    #[tokio::test]
    async fn test_stats_handler() {
        let state = state(InMemoryProvider::new());

        let response = stats_handler(State(state)).await;
        assert_eq!(response.manifests.hits, 0);
        assert_eq!(response.photos.misses, 0);
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }
}
