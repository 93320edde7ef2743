//! Error types for MRT Core

use std::path::PathBuf;
use thiserror::Error;

/// A single rejected query parameter.
///
/// `detail` is client facing and states the accepted values exactly.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid '{param}' parameter: {detail}")]
pub struct ValidationError {
    /// Name of the offending parameter
    pub param: &'static str,
    /// Human-readable constraint description
    pub detail: String,
}

impl ValidationError {
    pub fn new(param: &'static str, detail: impl Into<String>) -> Self {
        Self {
            param,
            detail: detail.into(),
        }
    }
}

/// Static reference data errors
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", .path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Catalog entry at position {0} has an empty id")]
    EmptyId(usize),

    #[error("Duplicate catalog id: {0}")]
    DuplicateId(String),
}

/// Raised when a stored warp type falls outside {0, 1}
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Invalid warp type: {0}")]
pub struct InvalidWarpType(pub i64);

/// Result type alias for query validation
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Result type alias for catalog loading
pub type CatalogResult<T> = Result<T, CatalogError>;
