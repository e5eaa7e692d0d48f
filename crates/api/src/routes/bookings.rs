use axum::routing::get;
use axum::Router;

use crate::handlers::bookings;
use crate::state::AppState;

/// Routes mounted at `/bookings`.
///
/// ```text
/// POST /  -> create_booking (optional auth)
/// GET  /  -> list_my_bookings (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(bookings::list_my_bookings).post(bookings::create_booking),
    )
}
