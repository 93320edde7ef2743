//! API route handlers

pub mod companies;
pub mod docs;
pub mod health;
pub mod warps;
pub mod worlds;

use axum::{routing::get, Router};
use tower::limit::GlobalConcurrencyLimitLayer;

use crate::state::AppState;

/// Create the API router
///
/// At most `max_in_flight` requests run under `/api` at once. Health and
/// documentation routes sit outside that limit and keep answering while
/// it is saturated.
pub fn create_router(state: AppState, max_in_flight: usize) -> Router {
    let api = Router::new()
        .nest("/api/v1", v1_routes())
        .nest("/api/v2", v2_routes())
        .layer(GlobalConcurrencyLimitLayer::new(max_in_flight.max(1)));

    Router::new()
        // Health endpoints
        .route("/ping", get(health::ping))
        .route("/health", get(health::health_check))
        // API documentation
        .route("/swagger", get(docs::swagger_ui))
        .route("/swagger/index.html", get(docs::swagger_ui))
        .route("/swagger/doc.json", get(docs::openapi_spec))
        .merge(api)
        .with_state(state)
}

fn v1_routes() -> Router<AppState> {
    catalog_routes()
        .route("/warps", get(warps::list_warps_v1))
        .route("/warps/:id", get(warps::get_warp))
}

fn v2_routes() -> Router<AppState> {
    catalog_routes()
        .route("/warps", get(warps::list_warps_v2))
        .route("/warps/:id", get(warps::get_warp))
}

/// Company and world lookups, identical in every API version
fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/companies", get(companies::list_companies))
        .route("/companies/:id", get(companies::get_company))
        .route("/worlds", get(worlds::list_worlds))
        .route("/worlds/:id", get(worlds::get_world))
}
