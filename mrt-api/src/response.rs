//! Response assembly
//!
//! Bodies are serialized up front so a serialization failure can be reported
//! as a render error instead of an aborted response.

use axum::{
    http::header,
    response::{IntoResponse, Response},
};
use mrt_core::logging::operations;
use mrt_core::{Page, Warp};
use mrt_db::WarpPage;
use serde::Serialize;
use tracing::warn;

use crate::dto::{PaginationResponse, WarpListResponse};
use crate::error::{ApiError, ApiResult};

/// Serialize `value` as a JSON response body
pub fn render_json<T: Serialize + ?Sized>(value: &T) -> ApiResult<Response> {
    let body = serde_json::to_vec(value).map_err(|e| {
        warn!(operation = operations::RENDER, error = %e, "Failed to render response");
        ApiError::Render(e.to_string())
    })?;

    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}

/// v1: the page as a bare array
pub fn warp_list(warps: &[Warp]) -> ApiResult<Response> {
    render_json(warps)
}

/// v2: the page wrapped with pagination metadata
pub fn warp_list_with_pagination(page: Page, result: WarpPage) -> ApiResult<Response> {
    let pagination = PaginationResponse::new(page, result.warps.len(), result.total_hits);

    render_json(&WarpListResponse {
        pagination,
        result: result.warps,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use serde::ser::Error as _;

    struct Unrenderable;

    impl Serialize for Unrenderable {
        fn serialize<S: serde::Serializer>(&self, _: S) -> Result<S::Ok, S::Error> {
            Err(S::Error::custom("unsupported value"))
        }
    }

    #[test]
    fn test_render_failure_is_render_error() {
        let err = render_json(&Unrenderable).unwrap_err();

        assert!(matches!(err, ApiError::Render(ref cause) if cause.contains("unsupported value")));
        assert_eq!(err.into_response().status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_empty_v1_list_is_array() {
        let response = warp_list(&[]).unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }

    #[test]
    fn test_pagination_metadata() {
        let page = Page { limit: 10, offset: 20 };
        let pagination = PaginationResponse::new(page, 3, 23);

        assert_eq!(
            serde_json::to_value(pagination).unwrap(),
            serde_json::json!({"limit": 10, "offset": 20, "hits": 3, "total_hits": 23})
        );
        assert_eq!(pagination.hits, page.hits_for(23));
    }
}
