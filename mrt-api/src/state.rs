//! Application state for the API server

use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use mrt_core::loader::{DEFAULT_COMPANIES_PATH, DEFAULT_WORLDS_PATH};
use mrt_core::ReferenceData;
use mrt_db::{WarpQueryService, WarpStore};

/// API server state
#[derive(Clone)]
pub struct AppState {
    /// Warp query core shared by v1 and v2
    pub warps: WarpQueryService,
    /// Company and world catalogs
    pub reference: ReferenceData,
    /// API version
    pub version: String,
}

impl AppState {
    pub fn new(store: Arc<dyn WarpStore>, reference: ReferenceData) -> Self {
        Self {
            warps: WarpQueryService::new(store),
            reference,
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// API server configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
    pub enable_cors: bool,
    /// `/api` requests processed at once; further ones wait
    pub max_in_flight: usize,
    pub companies_path: PathBuf,
    pub worlds_path: PathBuf,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            enable_cors: false,
            max_in_flight: 3,
            companies_path: PathBuf::from(DEFAULT_COMPANIES_PATH),
            worlds_path: PathBuf::from(DEFAULT_WORLDS_PATH),
        }
    }
}

impl ApiConfig {
    /// Load configuration from environment variables
    ///
    /// Environment variables:
    /// - MRT_HOST: Bind address
    /// - MRT_PORT: Bind port
    /// - MRT_ENABLE_CORS: Permissive CORS (true/false)
    /// - MRT_MAX_IN_FLIGHT: Concurrent request limit
    /// - MRT_COMPANIES_PATH: Company catalog YAML
    /// - MRT_WORLDS_PATH: World catalog YAML
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            host: env::var("MRT_HOST").unwrap_or(defaults.host),
            port: env::var("MRT_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.port),
            enable_cors: env::var("MRT_ENABLE_CORS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.enable_cors),
            max_in_flight: env::var("MRT_MAX_IN_FLIGHT")
                .ok()
                .and_then(|s| s.parse().ok())
                .filter(|n| *n > 0)
                .unwrap_or(defaults.max_in_flight),
            companies_path: env::var("MRT_COMPANIES_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.companies_path),
            worlds_path: env::var("MRT_WORLDS_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.worlds_path),
        }
    }
}
