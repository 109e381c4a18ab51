//! Mars Photos - A caching gateway for the Mars rover photo API
//!
//! Memoizes upstream manifest and photo calls with per-operation TTL caches
//! and cuts photo listings into pages with navigation flags.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod pagination;
pub mod service;
pub mod tasks;
pub mod upstream;

pub use api::AppState;
pub use cache::{memoize, Memoized};
pub use config::Config;
pub use service::RoverService;
pub use tasks::spawn_sweep_task;
