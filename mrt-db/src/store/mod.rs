//! Warp storage
//!
//! `WarpStore` is the seam between query validation and the database. The
//! MySQL backend serves production traffic; the in-memory backend evaluates
//! the same predicates in process for tests and local runs.

pub mod memory;
pub mod mysql;

use async_trait::async_trait;
use mrt_core::{Filter, QuerySpec, Warp};

use crate::error::StoreResult;

/// Read-only access to joined warp rows
#[async_trait]
pub trait WarpStore: Send + Sync {
    /// Warps matching the query's filter, ordered and paged
    async fn fetch_page(&self, spec: &QuerySpec) -> StoreResult<Vec<Warp>>;

    /// Number of warps matching the filter, ignoring paging
    async fn count(&self, filter: &Filter) -> StoreResult<u64>;

    async fn find_by_id(&self, id: u64) -> StoreResult<Option<Warp>>;

    /// Cheap reachability check for health reporting
    async fn ping(&self) -> StoreResult<()>;
}
