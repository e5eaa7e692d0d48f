//! Tour review model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tour_core::types::{DbId, Timestamp};

/// A review joined with the reviewer's display name.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TourReview {
    pub id: DbId,
    pub tour_id: DbId,
    pub user_id: DbId,
    pub user_name: String,
    pub booking_id: Option<DbId>,
    pub rating: i32,
    pub comment: String,
    pub created_at: Timestamp,
}

/// Body of `POST /reviews`. Rating and comment rules live in
/// `tour_core::feedback::validate_review`.
#[derive(Debug, Deserialize)]
pub struct CreateReview {
    pub tour_id: DbId,
    pub rating: i32,
    pub comment: Option<String>,
    pub booking_id: Option<DbId>,
}
