//! Repository for the `tour_comments` table.
//!
//! A user may leave one comment per tour (`uq_tour_comments_tour_user`).
//! Updates and deletes are scoped to the author: a comment owned by someone
//! else behaves exactly like a missing one.

use sqlx::PgPool;
use tour_core::types::DbId;

use crate::models::comment::{CreateComment, TourComment, UpdateComment};

/// Comment columns joined with the author, selected from a relation `c`.
const COLUMNS: &str = "c.id, c.tour_id, c.user_id, u.name AS user_name, u.avatar_url AS user_avatar, \
                       c.comment, c.rating, c.created_at, c.updated_at";

/// Provides CRUD operations for tour comments.
pub struct CommentRepo;

impl CommentRepo {
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateComment,
    ) -> Result<TourComment, sqlx::Error> {
        let query = format!(
            "WITH c AS ( \
                INSERT INTO tour_comments (tour_id, user_id, comment, rating) \
                VALUES ($1, $2, $3, $4) \
                RETURNING * \
             ) \
             SELECT {COLUMNS} FROM c JOIN users u ON u.id = c.user_id"
        );
        sqlx::query_as::<_, TourComment>(&query)
            .bind(input.tour_id)
            .bind(user_id)
            .bind(input.comment.trim())
            .bind(input.rating)
            .fetch_one(pool)
            .await
    }

    pub async fn find(pool: &PgPool, id: DbId) -> Result<Option<TourComment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tour_comments c JOIN users u ON u.id = c.user_id WHERE c.id = $1"
        );
        sqlx::query_as::<_, TourComment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Update a comment if `user_id` wrote it. Returns `None` otherwise.
    pub async fn update_owned(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
        input: &UpdateComment,
    ) -> Result<Option<TourComment>, sqlx::Error> {
        let query = format!(
            "WITH c AS ( \
                UPDATE tour_comments SET comment = $3, rating = $4 \
                WHERE id = $1 AND user_id = $2 \
                RETURNING * \
             ) \
             SELECT {COLUMNS} FROM c JOIN users u ON u.id = c.user_id"
        );
        sqlx::query_as::<_, TourComment>(&query)
            .bind(id)
            .bind(user_id)
            .bind(input.comment.trim())
            .bind(input.rating)
            .fetch_optional(pool)
            .await
    }

    /// Delete a comment if `user_id` wrote it. Returns `true` if a row was removed.
    pub async fn delete_owned(pool: &PgPool, id: DbId, user_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tour_comments WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// One page of a tour's comments, newest first.
    pub async fn list_for_tour(
        pool: &PgPool,
        tour_id: DbId,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<TourComment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tour_comments c JOIN users u ON u.id = c.user_id \
             WHERE c.tour_id = $1 \
             ORDER BY c.created_at DESC, c.id DESC \
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, TourComment>(&query)
            .bind(tour_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    pub async fn count_for_tour(pool: &PgPool, tour_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM tour_comments WHERE tour_id = $1")
            .bind(tour_id)
            .fetch_one(pool)
            .await
    }
}
