use axum::routing::post;
use axum::Router;

use crate::handlers::reviews;
use crate::state::AppState;

/// Routes mounted at `/reviews`.
///
/// ```text
/// POST /  -> create_review (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(reviews::create_review))
}
