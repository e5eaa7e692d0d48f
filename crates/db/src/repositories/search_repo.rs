//! Repository for filtered tour search.
//!
//! The WHERE clause is assembled from a validated [`SearchFilter`]; every
//! user-supplied value is bound as a parameter. Only tours in the searchable
//! status are considered. Each tour appears at most once because date-level
//! filters are expressed as `EXISTS` subqueries rather than joins.

use sqlx::PgPool;
use tour_core::search::{contains_pattern, SearchFilter, SEARCHABLE_STATUS};
use tour_core::static_assets::NO_IMAGE_PATH;

use super::tour_repo::DURATION_EXPR;
use crate::models::search::SearchResult;

/// A value bound into the dynamic search query.
#[derive(Debug, Clone, PartialEq)]
enum SearchArg {
    Text(String),
    Float(f64),
    Int(i32),
    TextList(Vec<String>),
}

/// WHERE clause plus its bind values, in placeholder order.
#[derive(Debug)]
struct WhereClause {
    sql: String,
    args: Vec<SearchArg>,
}

impl WhereClause {
    /// Index of the next free `$n` placeholder.
    fn next_idx(&self) -> usize {
        self.args.len() + 1
    }
}

fn build_where(filter: &SearchFilter) -> WhereClause {
    let mut conditions = Vec::new();
    let mut args = Vec::new();

    args.push(SearchArg::Text(SEARCHABLE_STATUS.to_string()));
    conditions.push(format!(
        "t.status_id = (SELECT id FROM statuses WHERE name = ${})",
        args.len()
    ));

    if let Some(title) = &filter.title {
        args.push(SearchArg::Text(contains_pattern(title)));
        let idx = args.len();
        conditions.push(format!("(t.title ILIKE ${idx} OR t.description ILIKE ${idx})"));
    }
    if let Some(min) = filter.min_price {
        args.push(SearchArg::Float(min));
        conditions.push(format!("t.price >= ${}", args.len()));
    }
    if let Some(max) = filter.max_price {
        args.push(SearchArg::Float(max));
        conditions.push(format!("t.price <= ${}", args.len()));
    }

    if !filter.ratings.is_empty() {
        let mut buckets = Vec::new();
        for bucket in &filter.ratings {
            args.push(SearchArg::Float(bucket.min));
            let lower = args.len();
            match bucket.max {
                Some(max) => {
                    args.push(SearchArg::Float(max));
                    buckets.push(format!("(t.rating >= ${lower} AND t.rating < ${})", args.len()));
                }
                None => buckets.push(format!("t.rating >= ${lower}")),
            }
        }
        conditions.push(format!("({})", buckets.join(" OR ")));
    }

    if filter.min_duration.is_some() || filter.max_duration.is_some() {
        let mut bounds = Vec::new();
        if let Some(min) = filter.min_duration {
            args.push(SearchArg::Int(min));
            bounds.push(format!("{DURATION_EXPR} >= ${}", args.len()));
        }
        if let Some(max) = filter.max_duration {
            args.push(SearchArg::Int(max));
            bounds.push(format!("{DURATION_EXPR} <= ${}", args.len()));
        }
        conditions.push(format!(
            "EXISTS (SELECT 1 FROM tour_dates td WHERE td.tour_id = t.id AND {})",
            bounds.join(" AND ")
        ));
    }

    if !filter.countries.is_empty() {
        args.push(SearchArg::TextList(
            filter.countries.iter().map(|c| c.to_string()).collect(),
        ));
        conditions.push(format!(
            "EXISTS (SELECT 1 FROM tour_dates td \
                     JOIN locations l ON l.id = td.to_location_id \
                     WHERE td.tour_id = t.id AND l.country = ANY(${}))",
            args.len()
        ));
    }

    WhereClause {
        sql: format!("WHERE {}", conditions.join(" AND ")),
        args,
    }
}

/// Bind every [`SearchArg`] onto a query in order.
macro_rules! bind_args {
    ($query:expr, $args:expr) => {{
        let mut q = $query;
        for arg in $args {
            q = match arg {
                SearchArg::Text(v) => q.bind(v),
                SearchArg::Float(v) => q.bind(v),
                SearchArg::Int(v) => q.bind(v),
                SearchArg::TextList(v) => q.bind(v),
            };
        }
        q
    }};
}

/// Provides filtered, sorted, paginated tour search.
pub struct SearchRepo;

impl SearchRepo {
    /// One page of tours matching `filter`.
    pub async fn search(
        pool: &PgPool,
        filter: &SearchFilter,
    ) -> Result<Vec<SearchResult>, sqlx::Error> {
        let clause = build_where(filter);
        let limit_idx = clause.next_idx();

        let query = format!(
            "SELECT t.id, t.title, t.price, t.rating, \
                    COALESCE((SELECT ci.image_src FROM tour_card_images ci \
                              WHERE ci.tour_id = t.id), '{NO_IMAGE_PATH}') AS image_src, \
                    (SELECT {DURATION_EXPR} FROM tour_dates td \
                     WHERE td.tour_id = t.id ORDER BY td.date_from LIMIT 1) AS duration, \
                    (SELECT l.name || ', ' || l.country FROM tour_dates td \
                     JOIN locations l ON l.id = td.to_location_id \
                     WHERE td.tour_id = t.id ORDER BY td.date_from LIMIT 1) AS location, \
                    (SELECT l.country FROM tour_dates td \
                     JOIN locations l ON l.id = td.to_location_id \
                     WHERE td.tour_id = t.id ORDER BY td.date_from LIMIT 1) AS region \
             FROM tours t \
             {where_clause} \
             ORDER BY {order_by} \
             LIMIT ${limit_idx} OFFSET ${offset_idx}",
            where_clause = clause.sql,
            order_by = filter.sort.order_by(),
            offset_idx = limit_idx + 1,
        );

        let q = bind_args!(sqlx::query_as::<_, SearchResult>(&query), clause.args);
        q.bind(filter.limit)
            .bind(filter.offset())
            .fetch_all(pool)
            .await
    }

    /// Number of tours matching `filter`, ignoring pagination.
    pub async fn count(pool: &PgPool, filter: &SearchFilter) -> Result<i64, sqlx::Error> {
        let clause = build_where(filter);
        let query = format!("SELECT COUNT(*) FROM tours t {}", clause.sql);
        let q = bind_args!(sqlx::query_scalar::<_, i64>(&query), clause.args);
        q.fetch_one(pool).await
    }
}
