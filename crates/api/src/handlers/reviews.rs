//! Handler for `POST /reviews`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use tour_core::feedback::validate_review;
use tour_db::models::review::{CreateReview, TourReview};
use tour_db::repositories::ReviewRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/reviews
///
/// Rate a tour. The tour's average rating is recomputed in the same
/// transaction. An unknown tour or booking is a 404.
pub async fn create_review(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(input): Json<CreateReview>,
) -> AppResult<(StatusCode, Json<DataResponse<TourReview>>)> {
    validate_review(input.rating, input.comment.as_deref())?;

    let review = ReviewRepo::create(&state.pool, auth_user.user_id, &input).await?;
    tracing::info!(
        review_id = review.id,
        tour_id = review.tour_id,
        rating = review.rating,
        "Review created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: review })))
}
