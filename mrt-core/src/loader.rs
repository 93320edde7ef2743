//! Static data loading
//!
//! Companies and worlds are maintained as YAML sequences
//! (`data/companies.yml`, `data/worlds.yml`). They are read exactly once,
//! before the server accepts requests.

use serde::de::DeserializeOwned;
use std::path::Path;
use tracing::info;

use crate::catalog::{CompanyCatalog, ReferenceData, WorldCatalog};
use crate::error::{CatalogError, CatalogResult};
use crate::logging::operations;
use crate::types::{Company, World};

/// Default location of the company list
pub const DEFAULT_COMPANIES_PATH: &str = "data/companies.yml";

/// Default location of the world list
pub const DEFAULT_WORLDS_PATH: &str = "data/worlds.yml";

/// Read a YAML sequence of records, preserving order
pub fn read_yaml_sequence<T: DeserializeOwned>(path: &Path) -> CatalogResult<Vec<T>> {
    let data = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_yaml::from_str(&data).map_err(|source| CatalogError::Yaml {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_companies(path: &Path) -> CatalogResult<CompanyCatalog> {
    let companies: Vec<Company> = read_yaml_sequence(path)?;
    let catalog = CompanyCatalog::from_entries(companies)?;

    info!(
        operation = operations::CATALOG_LOAD,
        count = catalog.len(),
        path = %path.display(),
        "Companies loaded"
    );

    Ok(catalog)
}

pub fn load_worlds(path: &Path) -> CatalogResult<WorldCatalog> {
    let worlds: Vec<World> = read_yaml_sequence(path)?;
    let catalog = WorldCatalog::from_entries(worlds)?;

    info!(
        operation = operations::CATALOG_LOAD,
        count = catalog.len(),
        path = %path.display(),
        "Worlds loaded"
    );

    Ok(catalog)
}

impl ReferenceData {
    /// Load both catalogs from YAML files
    pub fn load(companies_path: &Path, worlds_path: &Path) -> CatalogResult<Self> {
        Ok(Self::new(
            load_companies(companies_path)?,
            load_worlds(worlds_path)?,
        ))
    }
}
