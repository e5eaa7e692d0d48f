use axum::routing::get;
use axum::Router;

use crate::handlers::search;
use crate::state::AppState;

/// Routes mounted at `/search`.
///
/// ```text
/// GET /                     -> search_tours
/// GET /semantic             -> semantic_search
/// GET /similar/{tour_id}    -> similar_tours
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(search::search_tours))
        .route("/semantic", get(search::semantic_search))
        .route("/similar/{tour_id}", get(search::similar_tours))
}
