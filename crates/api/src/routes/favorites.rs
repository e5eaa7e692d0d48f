use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::favorites;
use crate::state::AppState;

/// Routes mounted at `/favorites`. All require auth.
///
/// ```text
/// GET    /           -> list_favorites
/// POST   /           -> add_favorite
/// DELETE /{tour_id}  -> remove_favorite
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(favorites::list_favorites).post(favorites::add_favorite),
        )
        .route("/{tour_id}", delete(favorites::remove_favorite))
}
