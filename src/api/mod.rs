//! API Module
//!
//! HTTP handlers and routing for the photo gateway.
//!
//! # Endpoints
//! - `GET /api/index` - Manifests of every rover
//! - `GET /api/apod` - Astronomy picture of the day
//! - `GET /api/rovers/:rover[/:sol[/:skip]]` - One page of rover photos
//! - `GET /stats` - Cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::{create_router, with_static_dir};
