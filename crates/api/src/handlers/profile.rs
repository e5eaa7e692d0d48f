//! Handlers for the signed-in user's own profile.

use axum::extract::State;
use axum::Json;
use tour_core::error::CoreError;
use tour_db::models::user::{UpdateProfile, UserResponse};
use tour_db::repositories::UserRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::validated_json::ValidatedJson;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/profile
pub async fn get_profile(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<DataResponse<UserResponse>>> {
    let user = UserRepo::find_by_id(&state.pool, auth_user.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("User", auth_user.user_id)))?;
    Ok(Json(DataResponse {
        data: UserResponse::from(&user),
    }))
}

/// PUT /api/v1/profile
///
/// Replace name, phone, and avatar. The name is trimmed and must stay non-empty;
/// blank phone or avatar values are stored as `NULL`.
pub async fn update_profile(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(input): ValidatedJson<UpdateProfile>,
) -> AppResult<Json<DataResponse<UserResponse>>> {
    let name = input.name.trim();
    if name.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "name is required".into(),
        )));
    }

    let input = UpdateProfile {
        name: name.to_string(),
        phone: non_blank(input.phone),
        avatar_url: non_blank(input.avatar_url),
    };

    let user = UserRepo::update_profile(&state.pool, auth_user.user_id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("User", auth_user.user_id)))?;

    tracing::info!(user_id = user.id, "Profile updated");

    Ok(Json(DataResponse {
        data: UserResponse::from(&user),
    }))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
