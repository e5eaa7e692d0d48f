//! Rows for the semantic tour index.

use serde::Serialize;
use sqlx::FromRow;
use tour_core::types::DbId;

/// The attributes a tour embedding is computed from.
#[derive(Debug, Clone, FromRow)]
pub struct TourFeatures {
    pub tour_id: DbId,
    pub title: String,
    pub price: f64,
    pub rating: f64,
    /// Duration of the earliest date; `None` for tours without dates.
    pub duration: Option<i32>,
}

/// A tour returned by a nearest-neighbour query.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarTour {
    pub id: DbId,
    pub title: String,
    pub price: f64,
    pub rating: f64,
    pub image_src: String,
    /// L2 distance from the query vector; smaller is closer.
    pub distance: f64,
}
