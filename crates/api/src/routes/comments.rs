use axum::routing::{post, put};
use axum::Router;

use crate::handlers::comments;
use crate::state::AppState;

/// Routes mounted at `/comments`. All require auth.
///
/// ```text
/// POST   /      -> create_comment
/// PUT    /{id}  -> update_comment
/// DELETE /{id}  -> delete_comment
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(comments::create_comment))
        .route(
            "/{id}",
            put(comments::update_comment).delete(comments::delete_comment),
        )
}
