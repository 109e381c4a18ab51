//! API Routes
//!
//! Configures the Axum router with all gateway endpoints.

use std::path::Path;

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use super::handlers::{
    apod_handler, health_handler, index_handler, rover_handler, stats_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /api/index` - Manifests of every rover
/// - `GET /api/apod` - Astronomy picture of the day
/// - `GET /api/rovers/:rover[/:sol[/:skip]]` - One page of rover photos
/// - `GET /stats` - Cache statistics
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/index", get(index_handler))
        .route("/api/apod", get(apod_handler))
        .route("/api/rovers/:rover", get(rover_handler))
        .route("/api/rovers/:rover/:sol", get(rover_handler))
        .route("/api/rovers/:rover/:sol/:skip", get(rover_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serves files from `dir` for every path no route matches.
pub fn with_static_dir(router: Router, dir: &Path) -> Router {
    router.fallback_service(ServeDir::new(dir))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use tower::util::ServiceExt;

    use crate::models::{Camera, Manifest, Photo};
    use crate::service::RoverService;
    use crate::upstream::InMemoryProvider;

    fn create_test_app() -> Router {
        let manifest = Manifest {
            name: "Opportunity".to_string(),
            landing_date: "2004-01-25".to_string(),
            launch_date: "2003-07-07".to_string(),
            status: "complete".to_string(),
            max_sol: 5111,
            max_date: "2018-06-11".to_string(),
            total_photos: 198439,
            photos: vec![],
        };
        let photos = (100..130)
            .map(|id| Photo {
                id,
                sol: 12,
                img_src: format!("{id}.jpg"),
                earth_date: "2004-02-06".to_string(),
                camera: Camera {
                    name: "NAVCAM".to_string(),
                    full_name: "Navigation Camera".to_string(),
                },
                rover: None,
            })
            .collect();
        let provider = InMemoryProvider::new()
            .with_manifest("opportunity", manifest)
            .with_photos("opportunity", 12, photos);
        let service = RoverService::new(
            Arc::new(provider),
            Duration::from_secs(300),
            Duration::from_secs(120),
            25,
        );
        create_router(AppState::new(service))
    }

    async fn get(app: Router, uri: &str) -> axum::response::Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let response = get(create_test_app(), "/health").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_stats_endpoint() {
        let response = get(create_test_app(), "/stats").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_rover_endpoint_with_sol_and_skip() {
        let response = get(create_test_app(), "/api/rovers/opportunity/12/25").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::LOCATION], "/opportunity");
    }

    #[tokio::test]
    async fn test_unknown_rover_is_not_found() {
        let response = get(create_test_app(), "/api/rovers/sojourner").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_invalid_sol_is_bad_request() {
        let response = get(create_test_app(), "/api/rovers/opportunity/latest").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_missing_manifest_is_bad_gateway() {
        let response = get(create_test_app(), "/api/index").await;
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
