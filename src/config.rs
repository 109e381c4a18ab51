//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// Rovers the gateway serves, in index-page order.
pub const ROVERS: [&str; 3] = ["curiosity", "opportunity", "spirit"];

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Key appended to every upstream request
    pub nasa_api_key: String,
    /// Upstream base URL
    pub nasa_api_url: String,
    /// HTTP server port
    pub server_port: u16,
    /// TTL of cached manifests in milliseconds
    pub manifest_ttl_ms: u64,
    /// TTL of cached photo pages in milliseconds
    pub photos_ttl_ms: u64,
    /// Photos per page
    pub photo_limit: u32,
    /// Upstream request timeout in seconds
    pub upstream_timeout_secs: u64,
    /// Interval of the expired-entry sweep in seconds, 0 disables it
    pub sweep_interval_secs: u64,
    /// Directory served for non-API paths
    pub static_dir: Option<PathBuf>,
}

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `NASA_API_KEY` - Upstream API key (default: DEMO_KEY)
    /// - `NASA_API_URL` - Upstream base URL (default: https://api.nasa.gov)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `MANIFEST_TTL_MS` - Manifest cache TTL (default: 300000)
    /// - `PHOTOS_TTL_MS` - Photo page cache TTL (default: 120000)
    /// - `PHOTO_LIMIT` - Photos per page (default: 25)
    /// - `UPSTREAM_TIMEOUT_SECS` - Upstream request timeout (default: 30)
    /// - `SWEEP_INTERVAL_SECS` - Expired-entry sweep interval (default: 0, disabled)
    /// - `STATIC_DIR` - Static file directory (default: none)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let photo_limit = match env_or("PHOTO_LIMIT", defaults.photo_limit) {
            0 => defaults.photo_limit,
            limit => limit,
        };

        Self {
            nasa_api_key: env::var("NASA_API_KEY").unwrap_or(defaults.nasa_api_key),
            nasa_api_url: env::var("NASA_API_URL").unwrap_or(defaults.nasa_api_url),
            server_port: env_or("SERVER_PORT", defaults.server_port),
            manifest_ttl_ms: env_or("MANIFEST_TTL_MS", defaults.manifest_ttl_ms),
            photos_ttl_ms: env_or("PHOTOS_TTL_MS", defaults.photos_ttl_ms),
            photo_limit,
            upstream_timeout_secs: env_or("UPSTREAM_TIMEOUT_SECS", defaults.upstream_timeout_secs),
            sweep_interval_secs: env_or("SWEEP_INTERVAL_SECS", defaults.sweep_interval_secs),
            static_dir: env::var_os("STATIC_DIR").map(PathBuf::from),
        }
    }

    pub fn manifest_ttl(&self) -> Duration {
        Duration::from_millis(self.manifest_ttl_ms)
    }

    pub fn photos_ttl(&self) -> Duration {
        Duration::from_millis(self.photos_ttl_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            nasa_api_key: "DEMO_KEY".to_string(),
            nasa_api_url: "https://api.nasa.gov".to_string(),
            server_port: 3000,
            manifest_ttl_ms: 5 * 60 * 1000,
            photos_ttl_ms: 2 * 60 * 1000,
            photo_limit: 25,
            upstream_timeout_secs: 30,
            sweep_interval_secs: 0,
            static_dir: None,
        }
    }
}
