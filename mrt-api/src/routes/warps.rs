//! Warp endpoints
//!
//! v1 and v2 share validation and querying; they differ only in how the
//! list is presented.

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    response::Response,
};
use mrt_core::{QuerySpec, WarpQueryParams};

use crate::error::{ApiError, ApiResult};
use crate::response;
use crate::state::AppState;

fn resolve_query(
    state: &AppState,
    query: Result<Query<WarpQueryParams>, QueryRejection>,
) -> ApiResult<QuerySpec> {
    let Query(params) = query.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    Ok(QuerySpec::from_params(&params, &state.reference)?)
}

/// `GET /api/v1/warps`: bare array
pub async fn list_warps_v1(
    State(state): State<AppState>,
    query: Result<Query<WarpQueryParams>, QueryRejection>,
) -> ApiResult<Response> {
    let spec = resolve_query(&state, query)?;
    let warps = state.warps.list(&spec).await?;

    response::warp_list(&warps)
}

/// `GET /api/v2/warps`: pagination envelope with total count
pub async fn list_warps_v2(
    State(state): State<AppState>,
    query: Result<Query<WarpQueryParams>, QueryRejection>,
) -> ApiResult<Response> {
    let spec = resolve_query(&state, query)?;
    let page = state.warps.list_with_total(&spec).await?;

    response::warp_list_with_pagination(spec.page, page)
}

/// `GET /warps/:id`
pub async fn get_warp(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<Response> {
    let id = parse_warp_id(&raw_id)?;
    let warp = state.warps.get(id).await?.ok_or(ApiError::NotFound)?;

    response::render_json(&warp)
}

fn parse_warp_id(raw: &str) -> ApiResult<u64> {
    raw.parse::<i64>()
        .ok()
        .and_then(|id| u64::try_from(id).ok())
        .ok_or_else(|| {
            ApiError::BadRequest("The 'id' parameter must be an unsigned integer.".to_string())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_warp_id() {
        assert_eq!(parse_warp_id("0").unwrap(), 0);
        assert_eq!(parse_warp_id("999999999").unwrap(), 999_999_999);
        assert!(parse_warp_id("-1").is_err());
        assert!(parse_warp_id("abc").is_err());
        assert!(parse_warp_id("1.5").is_err());
        assert!(parse_warp_id("").is_err());
    }
}
