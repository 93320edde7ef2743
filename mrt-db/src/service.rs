//! Warp query service
//!
//! The single query core behind both API versions. v1 only needs the page;
//! v2 also needs the total, fetched concurrently with the page using the
//! same filter.

use std::sync::Arc;
use std::time::Instant;

use mrt_core::logging::operations;
use mrt_core::{QuerySpec, Warp};
use tracing::{debug, error};

use crate::error::StoreResult;
use crate::store::WarpStore;

/// A page of warps together with the unpaged match count
#[derive(Debug, Clone, PartialEq)]
pub struct WarpPage {
    pub warps: Vec<Warp>,
    pub total_hits: u64,
}

#[derive(Clone)]
pub struct WarpQueryService {
    store: Arc<dyn WarpStore>,
}

impl WarpQueryService {
    pub fn new(store: Arc<dyn WarpStore>) -> Self {
        Self { store }
    }

    /// Fetch one page of warps
    pub async fn list(&self, spec: &QuerySpec) -> StoreResult<Vec<Warp>> {
        let started = Instant::now();

        let warps = self.store.fetch_page(spec).await.map_err(|e| {
            error!(operation = operations::WARP_LIST, error = %e, "Warp list query failed");
            e
        })?;

        debug!(
            operation = operations::WARP_LIST,
            hits = warps.len(),
            duration_ms = started.elapsed().as_millis() as u64,
            "Warps listed"
        );

        Ok(warps)
    }

    /// Fetch one page of warps and the total match count
    pub async fn list_with_total(&self, spec: &QuerySpec) -> StoreResult<WarpPage> {
        let started = Instant::now();

        let result = tokio::try_join!(
            self.store.fetch_page(spec),
            self.store.count(spec.count_filter()),
        );
        let (warps, total_hits) = result.map_err(|e| {
            error!(operation = operations::WARP_COUNT, error = %e, "Warp list query failed");
            e
        })?;

        debug!(
            operation = operations::WARP_LIST,
            hits = warps.len(),
            total_hits,
            duration_ms = started.elapsed().as_millis() as u64,
            "Warps listed with total"
        );

        Ok(WarpPage { warps, total_hits })
    }

    pub async fn get(&self, id: u64) -> StoreResult<Option<Warp>> {
        self.store.find_by_id(id).await.map_err(|e| {
            error!(operation = operations::WARP_GET, id, error = %e, "Warp lookup failed");
            e
        })
    }

    /// Whether the backing store currently answers
    pub async fn is_available(&self) -> bool {
        match self.store.ping().await {
            Ok(()) => true,
            Err(e) => {
                error!(operation = operations::HEALTH_CHECK, error = %e, "Warp store unreachable");
                false
            }
        }
    }
}
