//! Semantic index population.
//!
//! Every tour is embedded with [`tour_core::embedding::embed_tour`] and
//! upserted into `tour_embeddings`, whose HNSW index answers the
//! `/search/semantic` and `/search/similar` queries.

use tour_core::embedding::{embed_tour, to_pgvector_literal};
use tour_db::repositories::TourEmbeddingRepo;
use tour_db::DbPool;

/// Outcome of a full index rebuild.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexReport {
    pub indexed: usize,
    /// Tours whose title produced no tokens.
    pub skipped: usize,
}

/// Embed every tour and upsert its vector. Safe to run repeatedly.
pub async fn rebuild_index(pool: &DbPool) -> Result<IndexReport, sqlx::Error> {
    let rows = TourEmbeddingRepo::list_feature_rows(pool).await?;
    let mut report = IndexReport {
        indexed: 0,
        skipped: 0,
    };

    for row in rows {
        let Some(vector) = embed_tour(&row.title, row.price, row.rating, row.duration.unwrap_or(0))
        else {
            tracing::warn!(tour_id = row.tour_id, title = %row.title, "Skipping tour with no indexable title");
            report.skipped += 1;
            continue;
        };
        TourEmbeddingRepo::upsert(pool, row.tour_id, &to_pgvector_literal(&vector)).await?;
        report.indexed += 1;
    }

    tracing::info!(
        indexed = report.indexed,
        skipped = report.skipped,
        "Semantic index rebuilt"
    );
    Ok(report)
}
