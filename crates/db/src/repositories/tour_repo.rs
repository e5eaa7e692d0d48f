//! Repository for the tour catalogue: `tours`, `tour_dates`, `tour_seats`,
//! and the two image tables.

use std::collections::HashMap;

use sqlx::PgPool;
use tour_core::static_assets::NO_IMAGE_PATH;
use tour_core::types::DbId;

use crate::models::tour::{
    Tour, TourCard, TourDateInfo, TourDetail, TourImage, TourSeats, TourSwiper,
};

/// Card image of `t`, or the placeholder when the tour has none.
fn image_expr() -> String {
    format!(
        "COALESCE((SELECT ci.image_src FROM tour_card_images ci WHERE ci.tour_id = t.id), \
         '{NO_IMAGE_PATH}')"
    )
}

/// Whole days covered by tour date `td`.
pub(crate) const DURATION_EXPR: &str = "EXTRACT(DAY FROM (td.date_to - td.date_from))::int";

fn tour_select() -> String {
    format!(
        "SELECT t.id, t.title, t.description, t.detailed_description, t.call_to_action, \
                t.price, t.rating, t.total_seats, t.status_id, s.name AS status, \
                {image} AS image_src \
         FROM tours t \
         JOIN statuses s ON s.id = t.status_id",
        image = image_expr()
    )
}

fn date_select() -> String {
    format!(
        "SELECT td.id, td.tour_id, td.date_from, td.date_to, {DURATION_EXPR} AS duration, \
                fl.name AS from_location, tl.name AS to_location, tl.country AS to_country, \
                COALESCE(ts.available_seats, t.total_seats) AS available_seats \
         FROM tour_dates td \
         JOIN tours t ON t.id = td.tour_id \
         JOIN locations fl ON fl.id = td.from_location_id \
         JOIN locations tl ON tl.id = td.to_location_id \
         LEFT JOIN tour_seats ts ON ts.tour_date_id = td.id"
    )
}

/// Provides read access to the tour catalogue.
pub struct TourRepo;

impl TourRepo {
    // -----------------------------------------------------------------------
    // Details
    // -----------------------------------------------------------------------

    /// All tours with their status and every scheduled date.
    pub async fn list_details(pool: &PgPool) -> Result<Vec<TourDetail>, sqlx::Error> {
        let query = format!("{} ORDER BY t.id", tour_select());
        let tours = sqlx::query_as::<_, Tour>(&query).fetch_all(pool).await?;

        let query = format!("{} ORDER BY td.tour_id, td.date_from", date_select());
        let dates = sqlx::query_as::<_, TourDateInfo>(&query)
            .fetch_all(pool)
            .await?;

        let mut by_tour: HashMap<DbId, Vec<TourDateInfo>> = HashMap::new();
        for date in dates {
            by_tour.entry(date.tour_id).or_default().push(date);
        }

        Ok(tours
            .into_iter()
            .map(|tour| {
                let dates = by_tour.remove(&tour.id).unwrap_or_default();
                TourDetail { tour, dates }
            })
            .collect())
    }

    /// One tour with its dates, or `None` if it does not exist.
    pub async fn find_details(pool: &PgPool, id: DbId) -> Result<Option<TourDetail>, sqlx::Error> {
        let query = format!("{} WHERE t.id = $1", tour_select());
        let Some(tour) = sqlx::query_as::<_, Tour>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?
        else {
            return Ok(None);
        };

        let query = format!("{} WHERE td.tour_id = $1 ORDER BY td.date_from", date_select());
        let dates = sqlx::query_as::<_, TourDateInfo>(&query)
            .bind(id)
            .fetch_all(pool)
            .await?;

        Ok(Some(TourDetail { tour, dates }))
    }

    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM tours WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    // -----------------------------------------------------------------------
    // Storefront lists
    // -----------------------------------------------------------------------

    pub async fn list_cards(pool: &PgPool) -> Result<Vec<TourCard>, sqlx::Error> {
        let query = format!(
            "SELECT t.id, t.title, t.price, {image} AS image_src FROM tours t ORDER BY t.id",
            image = image_expr()
        );
        sqlx::query_as::<_, TourCard>(&query).fetch_all(pool).await
    }

    /// Cards for the given ids, in id order. Unknown ids are skipped.
    pub async fn list_cards_by_ids(
        pool: &PgPool,
        ids: &[DbId],
    ) -> Result<Vec<TourCard>, sqlx::Error> {
        let query = format!(
            "SELECT t.id, t.title, t.price, {image} AS image_src \
             FROM tours t WHERE t.id = ANY($1) ORDER BY t.id",
            image = image_expr()
        );
        sqlx::query_as::<_, TourCard>(&query)
            .bind(ids)
            .fetch_all(pool)
            .await
    }

    pub async fn list_swiper(pool: &PgPool) -> Result<Vec<TourSwiper>, sqlx::Error> {
        let query = format!(
            "SELECT t.id, t.title, t.description, t.call_to_action, {image} AS image_src \
             FROM tours t ORDER BY t.rating DESC, t.id",
            image = image_expr()
        );
        sqlx::query_as::<_, TourSwiper>(&query).fetch_all(pool).await
    }

    // -----------------------------------------------------------------------
    // Images & seats
    // -----------------------------------------------------------------------

    pub async fn list_gallery(pool: &PgPool, tour_id: DbId) -> Result<Vec<TourImage>, sqlx::Error> {
        sqlx::query_as::<_, TourImage>(
            "SELECT id, tour_id, image_src FROM tour_gallery_images WHERE tour_id = $1 ORDER BY id",
        )
        .bind(tour_id)
        .fetch_all(pool)
        .await
    }

    pub async fn list_card_images(pool: &PgPool) -> Result<Vec<TourImage>, sqlx::Error> {
        sqlx::query_as::<_, TourImage>(
            "SELECT id, tour_id, image_src FROM tour_card_images ORDER BY tour_id",
        )
        .fetch_all(pool)
        .await
    }

    /// Seat availability for every date of a tour, with the tour price.
    pub async fn list_seats_for_tour(
        pool: &PgPool,
        tour_id: DbId,
    ) -> Result<Vec<TourSeats>, sqlx::Error> {
        sqlx::query_as::<_, TourSeats>(
            "SELECT ts.id, ts.tour_date_id, ts.available_seats, t.price \
             FROM tour_seats ts \
             JOIN tour_dates td ON td.id = ts.tour_date_id \
             JOIN tours t ON t.id = td.tour_id \
             WHERE td.tour_id = $1 \
             ORDER BY td.date_from",
        )
        .bind(tour_id)
        .fetch_all(pool)
        .await
    }
}
