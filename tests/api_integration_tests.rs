//! Integration Tests for API Endpoints
//!
//! Tests full request/response cycles through the router, with an in-memory
//! provider and with the HTTP client against a mock upstream.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use mars_photos::{
    api::create_router,
    models::{Camera, Manifest, Photo},
    upstream::{InMemoryProvider, NasaClient},
    AppState, RoverService,
};
use mockito::Matcher;
use serde_json::Value;
use tower::ServiceExt;

// == Helper Functions ==

fn manifest(name: &str, max_sol: u32) -> Manifest {
    Manifest {
        name: name.to_string(),
        landing_date: "2012-08-06".to_string(),
        launch_date: "2011-11-26".to_string(),
        status: "active".to_string(),
        max_sol,
        max_date: "2024-02-19".to_string(),
        total_photos: 30,
        photos: vec![],
    }
}

fn photos(sol: u32, count: u64) -> Vec<Photo> {
    (1..=count)
        .map(|id| Photo {
            id: 1000 + id,
            sol,
            img_src: format!("https://mars.nasa.gov/msl/{id}.jpg"),
            earth_date: "2024-02-19".to_string(),
            camera: Camera {
                name: "MAST".to_string(),
                full_name: "Mast Camera".to_string(),
            },
            rover: None,
        })
        .collect()
}

fn provider() -> Arc<InMemoryProvider> {
    Arc::new(
        InMemoryProvider::new()
            .with_manifest("curiosity", manifest("Curiosity", 4102))
            .with_manifest("opportunity", manifest("Opportunity", 5111))
            .with_manifest("spirit", manifest("Spirit", 2208))
            .with_photos("curiosity", 4102, photos(4102, 30))
            .with_apod(serde_json::json!({ "title": "M31", "media_type": "image" })),
    )
}

fn create_test_app(provider: &Arc<InMemoryProvider>) -> Router {
    let service = RoverService::new(
        provider.clone(),
        Duration::from_secs(300),
        Duration::from_secs(120),
        25,
    );
    create_router(AppState::new(service))
}

async fn get(app: &Router, uri: &str) -> axum::response::Response {
    app.clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// == Index Endpoint Tests ==

#[tokio::test]
async fn test_index_endpoint() {
    let provider = provider();
    let app = create_test_app(&provider);

    let response = get(&app, "/api/index").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::LOCATION], "/");
    assert_eq!(response.headers()[header::ACCESS_CONTROL_EXPOSE_HEADERS], "Location");

    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["page"], "index");
    let names: Vec<&str> = json["manifests"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Curiosity", "Opportunity", "Spirit"]);
    assert!(json["manifests"][0].get("photos").is_none());
}

#[tokio::test]
async fn test_index_endpoint_is_cached() {
    let provider = provider();
    let app = create_test_app(&provider);

    get(&app, "/api/index").await;
    get(&app, "/api/index").await;

    assert_eq!(provider.manifest_calls(), 3);
}

// == Rover Endpoint Tests ==

#[tokio::test]
async fn test_rover_first_page() {
    let provider = provider();
    let app = create_test_app(&provider);

    let response = get(&app, "/api/rovers/curiosity").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::LOCATION], "/curiosity");

    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["page"], "rover");
    assert_eq!(json["rover"], "curiosity");
    assert_eq!(json["photos"].as_array().unwrap().len(), 25);
    assert_eq!(json["photos"][0]["id"], 1030);
    assert_eq!(json["nextSkip"], 25);
    assert_eq!(json["prevSkip"], -25);
    assert_eq!(json["hasEarlierImages"], true);
    assert_eq!(json["hasLaterImages"], false);
    assert_eq!(json["header"]["sol"], 4102);
    assert_eq!(json["header"]["hasEarlierSol"], true);
    assert_eq!(json["header"]["hasLaterSol"], false);
}

#[tokio::test]
async fn test_rover_last_page() {
    let provider = provider();
    let app = create_test_app(&provider);

    let response = get(&app, "/api/rovers/curiosity/4102/25").await;
    let json = body_to_json(response.into_body()).await;

    assert_eq!(json["photos"].as_array().unwrap().len(), 5);
    assert_eq!(json["nextSkip"], 50);
    assert_eq!(json["prevSkip"], 0);
    assert_eq!(json["hasEarlierImages"], false);
    assert_eq!(json["hasLaterImages"], true);
}

#[tokio::test]
async fn test_rover_first_sol() {
    let provider = provider();
    let app = create_test_app(&provider);

    let response = get(&app, "/api/rovers/spirit/1").await;
    let json = body_to_json(response.into_body()).await;

    assert_eq!(json["photos"].as_array().unwrap().len(), 0);
    assert_eq!(json["header"]["hasEarlierSol"], false);
    assert_eq!(json["header"]["hasLaterSol"], true);
}

#[tokio::test]
async fn test_rover_unknown() {
    let provider = provider();
    let app = create_test_app(&provider);

    let response = get(&app, "/api/rovers/sojourner").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_to_json(response.into_body()).await;
    assert!(json["error"].as_str().unwrap().contains("sojourner"));
}

#[tokio::test]
async fn test_rover_upstream_failure_then_recovery() {
    let provider = provider();
    let app = create_test_app(&provider);

    provider.fail_next(1);
    let failed = get(&app, "/api/rovers/curiosity").await;
    assert_eq!(failed.status(), StatusCode::BAD_GATEWAY);

    let recovered = get(&app, "/api/rovers/curiosity").await;
    assert_eq!(recovered.status(), StatusCode::OK);
}

// == APOD Endpoint Tests ==

#[tokio::test]
async fn test_apod_endpoint() {
    let provider = provider();
    let app = create_test_app(&provider);

    let response = get(&app, "/api/apod").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::LOCATION], "/apod");
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["page"], "apod");
    assert_eq!(json["apod"]["title"], "M31");
}

// == Stats Endpoint Tests ==

#[tokio::test]
async fn test_stats_reflect_cache_usage() {
    let provider = provider();
    let app = create_test_app(&provider);

    get(&app, "/api/rovers/curiosity").await;
    get(&app, "/api/rovers/curiosity").await;

    let response = get(&app, "/stats").await;
    let json = body_to_json(response.into_body()).await;

    assert_eq!(json["manifests"]["hits"], 1);
    assert_eq!(json["manifests"]["misses"], 1);
    assert_eq!(json["photos"]["hits"], 1);
    assert_eq!(json["photos"]["total_entries"], 1);
}

// == Health Endpoint Tests ==

#[tokio::test]
async fn test_health_endpoint() {
    let provider = provider();
    let app = create_test_app(&provider);

    let response = get(&app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["status"], "healthy");
}

// == Upstream Client Tests ==

#[tokio::test]
async fn test_repeated_requests_reach_upstream_once() {
    let mut server = mockito::Server::new_async().await;
    let manifest_mock = server
        .mock("GET", "/mars-photos/api/v1/manifests/spirit")
        .match_query(Matcher::UrlEncoded("api_key".into(), "it-key".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"photo_manifest": {"name": "Spirit", "landing_date": "2004-01-04",
                "launch_date": "2003-06-10", "status": "complete", "max_sol": 2208,
                "max_date": "2010-03-21", "total_photos": 124550, "photos": []}}"#,
        )
        .expect(1)
        .create_async()
        .await;
    let photos_mock = server
        .mock("GET", "/mars-photos/api/v1/rovers/spirit/photos")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("sol".into(), "2208".into()),
            Matcher::UrlEncoded("api_key".into(), "it-key".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"photos": [
                {"id": 7, "sol": 2208, "img_src": "a.jpg", "earth_date": "2010-03-21",
                 "camera": {"name": "PANCAM", "full_name": "Panoramic Camera"}},
                {"id": 9, "sol": 2208, "img_src": "b.jpg", "earth_date": "2010-03-21",
                 "camera": {"name": "PANCAM", "full_name": "Panoramic Camera"}}
            ]}"#,
        )
        .expect(1)
        .create_async()
        .await;

    let client = NasaClient::new(server.url(), "it-key", Duration::from_secs(5)).unwrap();
    let service = RoverService::new(
        Arc::new(client),
        Duration::from_secs(300),
        Duration::from_secs(120),
        25,
    );
    let app = create_router(AppState::new(service));

    let first = body_to_json(get(&app, "/api/rovers/spirit").await.into_body()).await;
    let second = body_to_json(get(&app, "/api/rovers/spirit").await.into_body()).await;

    assert_eq!(first, second);
    assert_eq!(first["photos"][0]["id"], 9);
    assert_eq!(first["photos"][1]["id"], 7);
    manifest_mock.assert_async().await;
    photos_mock.assert_async().await;
}
