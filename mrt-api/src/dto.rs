//! Data Transfer Objects for API requests and responses

use mrt_core::{Page, Warp};
use serde::{Deserialize, Serialize};

/// Pagination metadata of a v2 warp list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationResponse {
    pub limit: u32,
    pub offset: u64,
    /// Rows in this page
    pub hits: u64,
    /// Rows matching the filter, regardless of paging
    pub total_hits: u64,
}

impl PaginationResponse {
    pub fn new(page: Page, hits: usize, total_hits: u64) -> Self {
        Self {
            limit: page.limit,
            offset: page.offset,
            hits: hits as u64,
            total_hits,
        }
    }
}

/// v2 warp list envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WarpListResponse {
    pub pagination: PaginationResponse,
    pub result: Vec<Warp>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// `available` or `unavailable`
    pub store: String,
}

/// `GET /companies` query parameters
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompanyQueryParams {
    pub mode: Option<String>,
}

impl CompanyQueryParams {
    pub fn mode(&self) -> Option<&str> {
        self.mode.as_deref().filter(|s| !s.is_empty())
    }
}
