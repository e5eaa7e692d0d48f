//! Handlers for the caller's favorite tours.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tour_core::error::CoreError;
use tour_core::types::DbId;
use tour_db::models::favorite::{AddFavorite, Favorite, FavoriteTour};
use tour_db::repositories::FavoriteRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::tours::ensure_tour_exists;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/favorites
pub async fn list_favorites(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<DataResponse<Vec<FavoriteTour>>>> {
    let favorites = FavoriteRepo::list_for_user(&state.pool, auth_user.user_id).await?;
    Ok(Json(DataResponse { data: favorites }))
}

/// POST /api/v1/favorites
///
/// 404 if the tour does not exist, 409 if it is already a favorite.
pub async fn add_favorite(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(input): Json<AddFavorite>,
) -> AppResult<(StatusCode, Json<DataResponse<Favorite>>)> {
    ensure_tour_exists(&state, input.tour_id).await?;
    let favorite = FavoriteRepo::add(&state.pool, auth_user.user_id, input.tour_id).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: favorite })))
}

/// DELETE /api/v1/favorites/{tour_id}
pub async fn remove_favorite(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(tour_id): Path<DbId>,
) -> AppResult<StatusCode> {
    if FavoriteRepo::remove(&state.pool, auth_user.user_id, tour_id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::Missing(format!(
            "Tour {tour_id} is not in favorites"
        ))))
    }
}
