//! Repository for the `tour_embeddings` table.
//!
//! The `embedding` column uses pgvector's `vector(64)` type with an HNSW
//! index over L2 distance. Because we use runtime queries, vectors are
//! passed as pgvector text literals (e.g. `'[0.1,0.2,...]'`) and cast with
//! `::vector` in SQL.

use sqlx::PgPool;
use tour_core::search::SEARCHABLE_STATUS;
use tour_core::static_assets::NO_IMAGE_PATH;
use tour_core::types::DbId;

use super::tour_repo::DURATION_EXPR;
use crate::models::embedding::{SimilarTour, TourFeatures};

/// Provides storage and nearest-neighbour lookup for tour embeddings.
pub struct TourEmbeddingRepo;

impl TourEmbeddingRepo {
    /// The attributes every tour's embedding is built from.
    pub async fn list_feature_rows(pool: &PgPool) -> Result<Vec<TourFeatures>, sqlx::Error> {
        let query = format!(
            "SELECT t.id AS tour_id, t.title, t.price, t.rating, \
                    (SELECT {DURATION_EXPR} FROM tour_dates td \
                     WHERE td.tour_id = t.id ORDER BY td.date_from LIMIT 1) AS duration \
             FROM tours t ORDER BY t.id"
        );
        sqlx::query_as::<_, TourFeatures>(&query)
            .fetch_all(pool)
            .await
    }

    /// Insert or replace the embedding of a tour.
    pub async fn upsert(pool: &PgPool, tour_id: DbId, vector: &str) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO tour_embeddings (tour_id, embedding) VALUES ($1, $2::vector) \
             ON CONFLICT (tour_id) DO UPDATE SET embedding = EXCLUDED.embedding",
        )
        .bind(tour_id)
        .bind(vector)
        .execute(pool)
        .await?;
        Ok(())
    }

    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM tour_embeddings")
            .fetch_one(pool)
            .await
    }

    /// The stored vector of a tour as a pgvector literal, if indexed.
    pub async fn find_vector(pool: &PgPool, tour_id: DbId) -> Result<Option<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>(
            "SELECT embedding::text FROM tour_embeddings WHERE tour_id = $1",
        )
        .bind(tour_id)
        .fetch_optional(pool)
        .await
    }

    /// Searchable tours closest to `vector`, nearest first.
    ///
    /// `exclude` drops one tour from the results (the query tour itself when
    /// looking for similar tours).
    pub async fn nearest(
        pool: &PgPool,
        vector: &str,
        exclude: Option<DbId>,
        limit: i64,
    ) -> Result<Vec<SimilarTour>, sqlx::Error> {
        let query = format!(
            "SELECT t.id, t.title, t.price, t.rating, \
                    COALESCE((SELECT ci.image_src FROM tour_card_images ci \
                              WHERE ci.tour_id = t.id), '{NO_IMAGE_PATH}') AS image_src, \
                    (e.embedding <-> $1::vector)::float8 AS distance \
             FROM tour_embeddings e \
             JOIN tours t ON t.id = e.tour_id \
             WHERE ($2::bigint IS NULL OR e.tour_id <> $2) \
               AND t.status_id = (SELECT id FROM statuses WHERE name = $3) \
             ORDER BY e.embedding <-> $1::vector \
             LIMIT $4"
        );
        sqlx::query_as::<_, SimilarTour>(&query)
            .bind(vector)
            .bind(exclude)
            .bind(SEARCHABLE_STATUS)
            .bind(limit)
            .fetch_all(pool)
            .await
    }
}
