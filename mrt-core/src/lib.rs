//! MRT Core - warp catalog domain
//!
//! This crate provides the storage-agnostic half of the MRT API:
//! - Domain types served by the API (`Warp`, `Company`, `World`)
//! - Immutable reference catalogs loaded once from static YAML data
//! - The warp query front end: parameter validation, predicate building,
//!   ordering and pagination planning
//!
//! Query execution against a relational store lives in `mrt-db`; HTTP
//! presentation lives in `mrt-api`.

pub mod catalog;
pub mod error;
pub mod loader;
pub mod logging;
pub mod query;
pub mod types;

pub use catalog::{CatalogEntry, CompanyCatalog, ReferenceCatalog, ReferenceData, WorldCatalog};
pub use error::*;
pub use query::{
    Filter, OrderColumn, Page, Predicate, QuerySpec, SortDirection, SortOrder, WarpQueryParams,
    MAX_WARPS_LIMIT,
};
pub use types::*;
