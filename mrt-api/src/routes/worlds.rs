//! World catalog endpoints

use axum::{
    extract::{Path, State},
    response::Response,
};

use crate::error::{ApiError, ApiResult};
use crate::response::render_json;
use crate::state::AppState;

pub async fn list_worlds(State(state): State<AppState>) -> ApiResult<Response> {
    render_json(&state.reference.worlds.iter().collect::<Vec<_>>())
}

pub async fn get_world(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Response> {
    let world = state.reference.worlds.get(&id).ok_or(ApiError::NotFound)?;
    render_json(world)
}
