//! Handlers for writing tour comments. Listing lives in [`super::tours`].

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tour_core::error::CoreError;
use tour_core::feedback::validate_comment;
use tour_core::types::DbId;
use tour_db::models::comment::{CommentView, CreateComment, UpdateComment};
use tour_db::repositories::CommentRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::tours::ensure_tour_exists;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/comments
///
/// One comment per user per tour; a second one is a 409.
pub async fn create_comment(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(input): Json<CreateComment>,
) -> AppResult<(StatusCode, Json<DataResponse<CommentView>>)> {
    validate_comment(&input.comment, input.rating)?;
    ensure_tour_exists(&state, input.tour_id).await?;

    let comment = CommentRepo::create(&state.pool, auth_user.user_id, &input).await?;
    tracing::info!(comment_id = comment.id, tour_id = comment.tour_id, "Comment created");

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: CommentView::for_viewer(comment, Some(auth_user.user_id)),
        }),
    ))
}

/// PUT /api/v1/comments/{id}
///
/// Only the author may edit; anyone else gets a 404.
pub async fn update_comment(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateComment>,
) -> AppResult<Json<DataResponse<CommentView>>> {
    validate_comment(&input.comment, input.rating)?;

    let comment = CommentRepo::update_owned(&state.pool, id, auth_user.user_id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Comment", id)))?;

    Ok(Json(DataResponse {
        data: CommentView::for_viewer(comment, Some(auth_user.user_id)),
    }))
}

/// DELETE /api/v1/comments/{id}
pub async fn delete_comment(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if CommentRepo::delete_owned(&state.pool, id, auth_user.user_id).await? {
        tracing::info!(comment_id = id, "Comment deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::not_found("Comment", id)))
    }
}
