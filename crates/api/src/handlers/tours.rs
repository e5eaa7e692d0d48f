//! Handlers for the public tour catalogue.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Serialize;
use tour_core::error::CoreError;
use tour_core::feedback::{DEFAULT_COMMENT_LIMIT, MAX_COMMENT_LIMIT};
use tour_core::pagination::{clamp_page, page_offset};
use tour_core::types::DbId;
use tour_db::models::comment::CommentView;
use tour_db::models::review::TourReview;
use tour_db::models::tour::{TourCard, TourDetail, TourImage, TourSeats, TourSwiper};
use tour_db::repositories::{CommentRepo, ReviewRepo, TourRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::MaybeAuthUser;
use crate::query::{parse_id_list, IdsParams, PageParams};
use crate::response::{DataResponse, PageInfo};
use crate::state::AppState;

/// A page of comments with its pagination metadata.
#[derive(Debug, Serialize)]
pub struct CommentPage {
    pub data: Vec<CommentView>,
    pub pagination: PageInfo,
}

/// GET /api/v1/tours
///
/// Every tour with its status, dates, durations, and remaining seats.
pub async fn list_tours(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<TourDetail>>>> {
    let tours = TourRepo::list_details(&state.pool).await?;
    Ok(Json(DataResponse { data: tours }))
}

/// GET /api/v1/tours/{id}
pub async fn get_tour(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<TourDetail>>> {
    let tour = TourRepo::find_details(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Tour", id)))?;
    Ok(Json(DataResponse { data: tour }))
}

/// GET /api/v1/tours/cards
pub async fn list_cards(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<TourCard>>>> {
    let cards = TourRepo::list_cards(&state.pool).await?;
    Ok(Json(DataResponse { data: cards }))
}

/// GET /api/v1/tours/cards/by-ids?ids=1,2,3
///
/// Cards for a comma-separated id list. Unknown ids are skipped; a
/// non-integer id is a 400.
pub async fn list_cards_by_ids(
    State(state): State<AppState>,
    Query(params): Query<IdsParams>,
) -> AppResult<Json<DataResponse<Vec<TourCard>>>> {
    let raw = params
        .ids
        .ok_or_else(|| AppError::BadRequest("ids query parameter is required".into()))?;
    let ids = parse_id_list(&raw)
        .map_err(|bad| AppError::BadRequest(format!("Invalid tour id: {bad}")))?;

    if ids.is_empty() {
        return Ok(Json(DataResponse { data: Vec::new() }));
    }

    let cards = TourRepo::list_cards_by_ids(&state.pool, &ids).await?;
    Ok(Json(DataResponse { data: cards }))
}

/// GET /api/v1/tours/swiper
pub async fn list_swiper(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<TourSwiper>>>> {
    let slides = TourRepo::list_swiper(&state.pool).await?;
    Ok(Json(DataResponse { data: slides }))
}

/// GET /api/v1/tours/{id}/seats
pub async fn list_seats(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<TourSeats>>>> {
    ensure_tour_exists(&state, id).await?;
    let seats = TourRepo::list_seats_for_tour(&state.pool, id).await?;
    Ok(Json(DataResponse { data: seats }))
}

/// GET /api/v1/tours/{id}/gallery
pub async fn list_gallery(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<TourImage>>>> {
    ensure_tour_exists(&state, id).await?;
    let images = TourRepo::list_gallery(&state.pool, id).await?;
    Ok(Json(DataResponse { data: images }))
}

/// GET /api/v1/tours/{id}/reviews
pub async fn list_reviews(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<TourReview>>>> {
    ensure_tour_exists(&state, id).await?;
    let reviews = ReviewRepo::list_for_tour(&state.pool, id).await?;
    Ok(Json(DataResponse { data: reviews }))
}

/// GET /api/v1/tours/{id}/comments?page=&limit=
///
/// Newest first, `limit` 1..=50 (default 10). Each comment carries `is_owner` for the calling user;
/// anonymous callers own nothing.
pub async fn list_comments(
    State(state): State<AppState>,
    caller: MaybeAuthUser,
    Path(id): Path<DbId>,
    Query(params): Query<PageParams>,
) -> AppResult<Json<CommentPage>> {
    ensure_tour_exists(&state, id).await?;

    let page = clamp_page(params.page);
    // Out-of-range limits fall back to the default rather than the bound.
    let limit = params
        .limit
        .filter(|l| (1..=MAX_COMMENT_LIMIT).contains(l))
        .unwrap_or(DEFAULT_COMMENT_LIMIT);

    let total = CommentRepo::count_for_tour(&state.pool, id).await?;
    let comments =
        CommentRepo::list_for_tour(&state.pool, id, limit, page_offset(page, limit)).await?;

    let viewer = caller.user_id();
    Ok(Json(CommentPage {
        data: comments
            .into_iter()
            .map(|c| CommentView::for_viewer(c, viewer))
            .collect(),
        pagination: PageInfo::new(page, limit, total),
    }))
}

/// GET /api/v1/tour-images
///
/// Card images of every tour.
pub async fn list_card_images(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<TourImage>>>> {
    let images = TourRepo::list_card_images(&state.pool).await?;
    Ok(Json(DataResponse { data: images }))
}

pub(crate) async fn ensure_tour_exists(state: &AppState, id: DbId) -> AppResult<()> {
    if TourRepo::exists(&state.pool, id).await? {
        Ok(())
    } else {
        Err(AppError::Core(CoreError::not_found("Tour", id)))
    }
}
