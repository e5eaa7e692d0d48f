//! `GET /` service banner.

use std::collections::BTreeMap;

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Service description returned by `GET /`.
#[derive(Serialize)]
pub struct ServiceInfo {
    pub message: String,
    pub app: String,
    pub version: &'static str,
    pub env: String,
    /// Entry points of the public API, keyed by short name.
    pub endpoints: BTreeMap<&'static str, &'static str>,
}

const ENDPOINTS: &[(&str, &str)] = &[
    ("health", "/health - Service and database health"),
    ("tours", "/api/v1/tours - All tours with dates and seats"),
    ("cards", "/api/v1/tours/cards - Tour cards"),
    ("search", "/api/v1/search - Search with filters and pagination"),
    ("semantic", "/api/v1/search/semantic - Nearest tours to a text query"),
    ("gallery", "/api/v1/tours/{id}/gallery - Tour gallery images"),
    ("auth", "/api/v1/auth/login - Sign in"),
];

async fn service_info(State(state): State<AppState>) -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: format!("Welcome to {}", state.config.app_name),
        app: state.config.app_name.clone(),
        version: env!("CARGO_PKG_VERSION"),
        env: state.config.app_env.clone(),
        endpoints: ENDPOINTS.iter().copied().collect(),
    })
}

/// Mount `GET /` (root level).
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(service_info))
}
