//! Database configuration
//!
//! Connection settings are read from a YAML file (`config/db_config.yml` by
//! default) and may be overridden by environment variables:
//!
//! - MRT_DB_HOST
//! - MRT_DB_PORT
//! - MRT_DB_USER
//! - MRT_DB_PASSWORD
//! - MRT_DB_DATABASE
//! - MRT_DB_MAX_CONNECTIONS
//! - MRT_DB_ACQUIRE_TIMEOUT_SECS

use std::env;
use std::path::Path;
use std::time::Duration;

use mrt_core::logging::operations;
use serde::{Deserialize, Serialize};
use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions};
use tracing::{info, warn};

use crate::error::{StoreError, StoreResult};

pub const DEFAULT_DB_CONFIG_PATH: &str = "config/db_config.yml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub user: String,
    #[serde(default)]
    pub password: String,
    pub database: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_secs: u64,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3306
}

fn default_max_connections() -> u32 {
    10
}

fn default_acquire_timeout() -> u64 {
    5
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            user: "mywarp".to_string(),
            password: String::new(),
            database: "mywarp".to_string(),
            max_connections: default_max_connections(),
            acquire_timeout_secs: default_acquire_timeout(),
        }
    }
}

impl DbConfig {
    /// Read the YAML file, then apply `MRT_DB_*` overrides
    pub fn load(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| StoreError::Config(format!("{}: {}", path.display(), e)))?;
        let config: Self = serde_yaml::from_str(&raw)
            .map_err(|e| StoreError::Config(format!("{}: {}", path.display(), e)))?;

        Ok(config.with_overrides(|key| env::var(key).ok()))
    }

    /// Defaults overridden by `MRT_DB_*`, for deployments without a file
    pub fn from_env() -> Self {
        Self::default().with_overrides(|key| env::var(key).ok())
    }

    /// `load` when `path` exists, otherwise `from_env`
    pub fn load_or_env(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        if path.exists() {
            return Self::load(path);
        }

        warn!(
            path = %path.display(),
            "Database config file not found, using MRT_DB_* environment"
        );
        Ok(Self::from_env())
    }

    fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(host) = lookup("MRT_DB_HOST") {
            self.host = host;
        }
        if let Some(port) = lookup("MRT_DB_PORT").and_then(|s| s.parse().ok()) {
            self.port = port;
        }
        if let Some(user) = lookup("MRT_DB_USER") {
            self.user = user;
        }
        if let Some(password) = lookup("MRT_DB_PASSWORD") {
            self.password = password;
        }
        if let Some(database) = lookup("MRT_DB_DATABASE") {
            self.database = database;
        }
        if let Some(max) = lookup("MRT_DB_MAX_CONNECTIONS").and_then(|s| s.parse().ok()) {
            self.max_connections = max;
        }
        if let Some(secs) = lookup("MRT_DB_ACQUIRE_TIMEOUT_SECS").and_then(|s| s.parse().ok()) {
            self.acquire_timeout_secs = secs;
        }
        self
    }

    pub fn connect_options(&self) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database)
    }

    /// Open a connection pool and verify one connection can be acquired
    pub async fn connect(&self) -> StoreResult<MySqlPool> {
        let pool = MySqlPoolOptions::new()
            .max_connections(self.max_connections)
            .acquire_timeout(Duration::from_secs(self.acquire_timeout_secs))
            .connect_with(self.connect_options())
            .await?;

        info!(
            operation = operations::DB_CONNECT,
            host = %self.host,
            port = self.port,
            database = %self.database,
            "Connected to warp database"
        );

        Ok(pool)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_load_yaml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "host: db.internal\nport: 3307\nuser: api\npassword: secret\ndatabase: mywarp_main"
        )
        .unwrap();

        let config = DbConfig::load(file.path()).unwrap();

        assert_eq!(config.host, "db.internal");
        assert_eq!(config.port, 3307);
        assert_eq!(config.user, "api");
        assert_eq!(config.database, "mywarp_main");
        assert_eq!(config.max_connections, 10);
        assert_eq!(config.acquire_timeout_secs, 5);
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let result = DbConfig::load("/nonexistent/db_config.yml");
        assert!(matches!(result, Err(StoreError::Config(_))));
    }

    #[test]
    fn test_missing_file_falls_back_to_env() {
        let dir = tempfile::tempdir().unwrap();

        let config = DbConfig::load_or_env(dir.path().join("db_config.yml")).unwrap();

        assert_eq!(config.max_connections, DbConfig::from_env().max_connections);
    }

    #[test]
    fn test_present_but_invalid_file_is_not_skipped() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "port: [not, a, port]").unwrap();

        let result = DbConfig::load_or_env(file.path());
        assert!(matches!(result, Err(StoreError::Config(_))));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("MRT_DB_HOST", "override"),
            ("MRT_DB_PORT", "not-a-port"),
            ("MRT_DB_MAX_CONNECTIONS", "3"),
        ]
        .into_iter()
        .collect();

        let config = DbConfig::default().with_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.host, "override");
        assert_eq!(config.port, 3306);
        assert_eq!(config.max_connections, 3);
        assert_eq!(config.database, "mywarp");
    }
}
