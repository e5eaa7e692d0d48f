//! Caching headers for files served under `/static`.

use axum::body::Body;
use axum::extract::Request;
use axum::http::header::{CACHE_CONTROL, ETAG, IF_NONE_MATCH};
use axum::http::{HeaderValue, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use tour_core::static_assets::{cache_control_for, etag_for};

/// Attach `Cache-Control` by file extension and a content `ETag`.
///
/// A request whose `If-None-Match` equals the computed ETag gets an empty
/// `304 Not Modified`. Only full `200` bodies are buffered and tagged; range
/// responses, redirects, and errors stream through untouched.
pub async fn cache_static(request: Request, next: Next) -> Response {
    let path = request.uri().path().to_owned();
    let if_none_match = request.headers().get(IF_NONE_MATCH).cloned();

    let response = next.run(request).await;
    if response.status() != StatusCode::OK {
        return response;
    }

    let (mut parts, body) = response.into_parts();
    parts
        .headers
        .insert(CACHE_CONTROL, HeaderValue::from_static(cache_control_for(&path)));

    let bytes = match axum::body::to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(err) => {
            tracing::error!(error = %err, path = %path, "Failed to buffer static file");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    let etag = etag_for(&bytes);
    let Ok(etag_value) = HeaderValue::from_str(&etag) else {
        return Response::from_parts(parts, Body::from(bytes));
    };

    if if_none_match.as_ref() == Some(&etag_value) {
        let mut not_modified = StatusCode::NOT_MODIFIED.into_response();
        let headers = not_modified.headers_mut();
        headers.insert(ETAG, etag_value);
        if let Some(cache_control) = parts.headers.get(CACHE_CONTROL) {
            headers.insert(CACHE_CONTROL, cache_control.clone());
        }
        return not_modified;
    }

    parts.headers.insert(ETAG, etag_value);
    Response::from_parts(parts, Body::from(bytes))
}
