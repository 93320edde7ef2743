//! Company catalog endpoints

use axum::{
    extract::{Path, Query, State},
    response::Response,
};
use mrt_core::TransportMode;

use crate::dto::CompanyQueryParams;
use crate::error::{ApiError, ApiResult};
use crate::response::render_json;
use crate::state::AppState;

/// List companies, optionally only those of one transport mode
pub async fn list_companies(
    State(state): State<AppState>,
    Query(params): Query<CompanyQueryParams>,
) -> ApiResult<Response> {
    let companies = &state.reference.companies;

    match params.mode() {
        None => render_json(&companies.iter().collect::<Vec<_>>()),
        Some(raw) => {
            let mode: TransportMode = raw.parse().map_err(|_| {
                ApiError::BadRequest(
                    "The 'mode' query parameter must be one of 'warp_rail', 'bus', 'air', 'sea', or 'other'."
                        .to_string(),
                )
            })?;
            render_json(companies.with_mode(mode))
        }
    }
}

pub async fn get_company(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Response> {
    let company = state.reference.companies.get(&id).ok_or(ApiError::NotFound)?;
    render_json(company)
}
