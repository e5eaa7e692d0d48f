//! Repository for the `tour_reviews` table.

use sqlx::PgPool;
use tour_core::types::DbId;

use crate::models::review::{CreateReview, TourReview};

const SELECT: &str = "SELECT r.id, r.tour_id, r.user_id, u.name AS user_name, r.booking_id, \
                             r.rating, r.comment, r.created_at \
                      FROM tour_reviews r JOIN users u ON u.id = r.user_id";

/// Provides review creation and listing.
pub struct ReviewRepo;

impl ReviewRepo {
    /// Insert a review and recompute the tour's average rating.
    ///
    /// Both writes share one transaction. A missing tour or booking surfaces
    /// as a foreign-key violation.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateReview,
    ) -> Result<TourReview, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let id = sqlx::query_scalar::<_, DbId>(
            "INSERT INTO tour_reviews (tour_id, user_id, booking_id, rating, comment) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING id",
        )
        .bind(input.tour_id)
        .bind(user_id)
        .bind(input.booking_id)
        .bind(input.rating)
        .bind(input.comment.as_deref().unwrap_or(""))
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(
            "UPDATE tours SET rating = \
                (SELECT ROUND(AVG(rating)::numeric, 2)::float8 FROM tour_reviews WHERE tour_id = $1) \
             WHERE id = $1",
        )
        .bind(input.tour_id)
        .execute(&mut *tx)
        .await?;

        let query = format!("{SELECT} WHERE r.id = $1");
        let review = sqlx::query_as::<_, TourReview>(&query)
            .bind(id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(review)
    }

    /// Reviews of a tour, newest first.
    pub async fn list_for_tour(
        pool: &PgPool,
        tour_id: DbId,
    ) -> Result<Vec<TourReview>, sqlx::Error> {
        let query = format!("{SELECT} WHERE r.tour_id = $1 ORDER BY r.created_at DESC, r.id DESC");
        sqlx::query_as::<_, TourReview>(&query)
            .bind(tour_id)
            .fetch_all(pool)
            .await
    }
}
