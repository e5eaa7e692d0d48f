//! Repository for the `bookings` table.

use sqlx::PgPool;
use tour_core::booking::{compute_total_price, BOOKING_STATUS_PENDING};
use tour_core::types::DbId;

use crate::models::booking::{Booking, BookingAttempt, CreateBooking, UserBooking};

const COLUMNS: &str = "id, tour_date_id, user_id, customer_name, customer_email, \
                       customer_phone, seats, total_price, status, booked_at";

/// Provides booking creation and per-user listing.
pub struct BookingRepo;

impl BookingRepo {
    /// Reserve seats and insert a pending booking in one transaction.
    ///
    /// The seat counter is decremented with a guarded `UPDATE`, so two
    /// concurrent bookings can never take the same last seat. When the guard
    /// fails the transaction is rolled back and no booking is written.
    pub async fn create(
        pool: &PgPool,
        user_id: Option<DbId>,
        input: &CreateBooking,
    ) -> Result<BookingAttempt, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let price = sqlx::query_scalar::<_, f64>(
            "SELECT t.price FROM tour_dates td JOIN tours t ON t.id = td.tour_id WHERE td.id = $1",
        )
        .bind(input.tour_date_id)
        .fetch_optional(&mut *tx)
        .await?;
        let Some(price) = price else {
            return Ok(BookingAttempt::DateNotFound);
        };

        // Dates without a seat row start from the tour's capacity.
        sqlx::query(
            "INSERT INTO tour_seats (tour_date_id, available_seats) \
             SELECT td.id, t.total_seats FROM tour_dates td JOIN tours t ON t.id = td.tour_id \
             WHERE td.id = $1 \
             ON CONFLICT (tour_date_id) DO NOTHING",
        )
        .bind(input.tour_date_id)
        .execute(&mut *tx)
        .await?;

        let reserved = sqlx::query_scalar::<_, i32>(
            "UPDATE tour_seats SET available_seats = available_seats - $2 \
             WHERE tour_date_id = $1 AND available_seats >= $2 \
             RETURNING available_seats",
        )
        .bind(input.tour_date_id)
        .bind(input.seats)
        .fetch_optional(&mut *tx)
        .await?;

        if reserved.is_none() {
            let available = sqlx::query_scalar::<_, i32>(
                "SELECT available_seats FROM tour_seats WHERE tour_date_id = $1",
            )
            .bind(input.tour_date_id)
            .fetch_one(&mut *tx)
            .await?;
            return Ok(BookingAttempt::NotEnoughSeats { available });
        }

        let query = format!(
            "INSERT INTO bookings \
                (tour_date_id, user_id, customer_name, customer_email, customer_phone, \
                 seats, total_price, status) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {COLUMNS}"
        );
        let booking = sqlx::query_as::<_, Booking>(&query)
            .bind(input.tour_date_id)
            .bind(user_id)
            .bind(&input.customer_name)
            .bind(&input.customer_email)
            .bind(&input.customer_phone)
            .bind(input.seats)
            .bind(compute_total_price(price, input.seats))
            .bind(BOOKING_STATUS_PENDING)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(BookingAttempt::Created(booking))
    }

    /// A user's bookings with tour title and route, newest first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<UserBooking>, sqlx::Error> {
        sqlx::query_as::<_, UserBooking>(
            "SELECT b.id, t.id AS tour_id, t.title AS tour_title, \
                    fl.name AS from_location, tl.name AS to_location, \
                    td.date_from, td.date_to, \
                    b.customer_name, b.customer_email, b.customer_phone, \
                    b.seats, b.total_price, b.status, b.booked_at \
             FROM bookings b \
             JOIN tour_dates td ON td.id = b.tour_date_id \
             JOIN tours t ON t.id = td.tour_id \
             JOIN locations fl ON fl.id = td.from_location_id \
             JOIN locations tl ON tl.id = td.to_location_id \
             WHERE b.user_id = $1 \
             ORDER BY b.booked_at DESC, b.id DESC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }
}
