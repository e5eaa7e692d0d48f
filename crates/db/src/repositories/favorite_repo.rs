//! Repository for the `user_favorites` table.

use sqlx::PgPool;
use tour_core::static_assets::NO_IMAGE_PATH;
use tour_core::types::DbId;

use crate::models::favorite::{Favorite, FavoriteTour};

/// Provides per-user favorite tours.
pub struct FavoriteRepo;

impl FavoriteRepo {
    /// Mark a tour as a favorite.
    ///
    /// A repeat violates `uq_user_favorites_user_tour`; an unknown tour
    /// violates the foreign key.
    pub async fn add(pool: &PgPool, user_id: DbId, tour_id: DbId) -> Result<Favorite, sqlx::Error> {
        sqlx::query_as::<_, Favorite>(
            "INSERT INTO user_favorites (user_id, tour_id) VALUES ($1, $2) \
             RETURNING id, user_id, tour_id, created_at",
        )
        .bind(user_id)
        .bind(tour_id)
        .fetch_one(pool)
        .await
    }

    /// Returns `true` if a favorite was removed.
    pub async fn remove(pool: &PgPool, user_id: DbId, tour_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM user_favorites WHERE user_id = $1 AND tour_id = $2")
            .bind(user_id)
            .bind(tour_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// A user's favorites with tour title, most recent first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<FavoriteTour>, sqlx::Error> {
        let query = format!(
            "SELECT f.tour_id, t.title, t.price, \
                    COALESCE((SELECT ci.image_src FROM tour_card_images ci \
                              WHERE ci.tour_id = t.id), '{NO_IMAGE_PATH}') AS image_src, \
                    f.created_at \
             FROM user_favorites f \
             JOIN tours t ON t.id = f.tour_id \
             WHERE f.user_id = $1 \
             ORDER BY f.created_at DESC, f.id DESC"
        );
        sqlx::query_as::<_, FavoriteTour>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }
}
