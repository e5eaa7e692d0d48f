//! Handlers for filtered and semantic tour search.

use axum::extract::{Path, Query, State};
use axum::Json;
use axum::http::HeaderMap;
use serde::Serialize;
use tour_core::embedding::{embed_query, to_pgvector_literal, DEFAULT_NEIGHBOURS, MAX_NEIGHBOURS};
use tour_core::error::CoreError;
use tour_core::pagination::clamp_limit;
use tour_core::search::{AppliedFilters, SearchFilter};
use tour_core::types::DbId;
use tour_db::models::embedding::SimilarTour;
use tour_db::models::search::SearchResult;
use tour_db::repositories::{SearchRepo, TourEmbeddingRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::tours::ensure_tour_exists;
use crate::query::{LimitParams, SearchQuery, SemanticParams};
use crate::response::{DataResponse, PageInfo};
use crate::state::AppState;

/// Body of `GET /search`.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub data: Vec<SearchResult>,
    pub pagination: PageInfo,
    pub filters: AppliedFilters,
}

/// GET /api/v1/search
///
/// Filtered, sorted, paginated search over active tours. Page metadata is
/// returned both in the body and as `X-Total-Count`, `X-Total-Pages`,
/// `X-Current-Page`, and `X-Per-Page` headers.
pub async fn search_tours(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> AppResult<(HeaderMap, Json<SearchResponse>)> {
    let raw = query.as_raw();
    let filter = SearchFilter::parse(&raw)?;

    let total = SearchRepo::count(&state.pool, &filter).await?;
    let results = SearchRepo::search(&state.pool, &filter).await?;
    let pagination = PageInfo::new(filter.page, filter.limit, total);

    tracing::debug!(
        total,
        returned = results.len(),
        page = filter.page,
        "Tour search completed"
    );

    Ok((
        pagination.headers(),
        Json(SearchResponse {
            data: results,
            pagination,
            filters: AppliedFilters::new(&raw, &filter),
        }),
    ))
}

/// GET /api/v1/search/semantic?q=&price=&rating=&duration=&limit=
///
/// Nearest active tours to a free-text query, optionally biased by price,
/// rating, and duration. At least one of the inputs must be present.
pub async fn semantic_search(
    State(state): State<AppState>,
    Query(params): Query<SemanticParams>,
) -> AppResult<Json<DataResponse<Vec<SimilarTour>>>> {
    let text = params.q.as_deref().map(str::trim).unwrap_or_default();
    if text.is_empty()
        && params.price.is_none()
        && params.rating.is_none()
        && params.duration.is_none()
    {
        return Err(AppError::BadRequest(
            "Provide q or at least one of price, rating, duration".into(),
        ));
    }
    if params.price.is_some_and(|p| !p.is_finite() || p < 0.0) {
        return Err(AppError::Core(CoreError::Validation(
            "price must be a non-negative number".into(),
        )));
    }
    if params.rating.is_some_and(|r| !r.is_finite()) {
        return Err(AppError::Core(CoreError::Validation(
            "rating must be a number".into(),
        )));
    }

    let limit = clamp_limit(params.limit, DEFAULT_NEIGHBOURS, MAX_NEIGHBOURS);
    let vector = embed_query(text, params.price, params.rating, params.duration);
    let tours =
        TourEmbeddingRepo::nearest(&state.pool, &to_pgvector_literal(&vector), None, limit)
            .await?;

    Ok(Json(DataResponse { data: tours }))
}

/// GET /api/v1/search/similar/{tour_id}?limit=
///
/// Nearest active tours to an indexed tour, excluding the tour itself.
pub async fn similar_tours(
    State(state): State<AppState>,
    Path(tour_id): Path<DbId>,
    Query(params): Query<LimitParams>,
) -> AppResult<Json<DataResponse<Vec<SimilarTour>>>> {
    ensure_tour_exists(&state, tour_id).await?;

    let vector = TourEmbeddingRepo::find_vector(&state.pool, tour_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Missing(format!(
                "Tour {tour_id} is not in the semantic index"
            )))
        })?;

    let limit = clamp_limit(params.limit, DEFAULT_NEIGHBOURS, MAX_NEIGHBOURS);
    let tours = TourEmbeddingRepo::nearest(&state.pool, &vector, Some(tour_id), limit).await?;

    Ok(Json(DataResponse { data: tours }))
}
