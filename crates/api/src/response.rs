//! Shared response envelope types for API handlers.
//!
//! All API responses use a `{ "data": ... }` envelope. Use [`DataResponse`]
//! instead of ad-hoc `serde_json::json!({ "data": ... })` to get compile-time
//! type safety and consistent serialization.

use axum::http::{HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;
use tour_core::pagination::total_pages;

/// Standard `{ "data": T }` response envelope.
///
/// ```ignore
/// Ok(Json(DataResponse { data: items }))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// Page metadata attached to paginated lists.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PageInfo {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    pub total_pages: i64,
}

impl PageInfo {
    pub fn new(page: i64, limit: i64, total: i64) -> Self {
        Self {
            page,
            limit,
            total,
            total_pages: total_pages(total, limit),
        }
    }

    /// `X-Total-Count`, `X-Total-Pages`, `X-Current-Page`, `X-Per-Page`.
    pub fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        for (name, value) in [
            ("x-total-count", self.total),
            ("x-total-pages", self.total_pages),
            ("x-current-page", self.page),
            ("x-per-page", self.limit),
        ] {
            headers.insert(HeaderName::from_static(name), HeaderValue::from(value));
        }
        headers
    }
}

/// Names of the pagination headers, exposed through CORS.
pub const PAGINATION_HEADERS: [&str; 4] =
    ["x-total-count", "x-total-pages", "x-current-page", "x-per-page"];
