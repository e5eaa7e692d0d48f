//! User favorite model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tour_core::types::{DbId, Timestamp};

/// A row from the `user_favorites` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Favorite {
    pub id: DbId,
    pub user_id: DbId,
    pub tour_id: DbId,
    pub created_at: Timestamp,
}

/// A favorite joined with the tour it points at.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FavoriteTour {
    pub tour_id: DbId,
    pub title: String,
    pub price: f64,
    pub image_src: String,
    pub created_at: Timestamp,
}

/// Body of `POST /favorites`.
#[derive(Debug, Deserialize)]
pub struct AddFavorite {
    pub tour_id: DbId,
}
