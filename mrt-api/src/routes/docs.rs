//! API documentation endpoints

use axum::response::{Html, Response};

use crate::error::ApiResult;
use crate::openapi::{OpenApiSpec, SWAGGER_UI_HTML};
use crate::response::render_json;

/// Swagger UI
pub async fn swagger_ui() -> Html<&'static str> {
    Html(SWAGGER_UI_HTML)
}

/// OpenAPI document
pub async fn openapi_spec() -> ApiResult<Response> {
    render_json(&OpenApiSpec::generate())
}
