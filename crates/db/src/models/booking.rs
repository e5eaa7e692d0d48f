//! Booking model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tour_core::types::{DbId, Timestamp};
use validator::Validate;

/// A row from the `bookings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Booking {
    pub id: DbId,
    pub tour_date_id: DbId,
    /// `None` for guest bookings.
    pub user_id: Option<DbId>,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub seats: i32,
    pub total_price: f64,
    pub status: String,
    pub booked_at: Timestamp,
}

/// Body of `POST /bookings`.
///
/// The total price is computed server-side from the tour price; any
/// `total_price` sent by the client is ignored.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateBooking {
    pub tour_date_id: DbId,
    #[validate(length(min = 1, max = 100))]
    pub customer_name: String,
    #[validate(email)]
    pub customer_email: String,
    #[validate(length(min = 3, max = 32))]
    pub customer_phone: String,
    pub seats: i32,
}

/// A booking joined with its tour date, tour title, and route.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserBooking {
    pub id: DbId,
    pub tour_id: DbId,
    pub tour_title: String,
    pub from_location: String,
    pub to_location: String,
    pub date_from: Timestamp,
    pub date_to: Timestamp,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub seats: i32,
    pub total_price: f64,
    pub status: String,
    pub booked_at: Timestamp,
}

/// Outcome of a booking attempt that did not fail at the database level.
#[derive(Debug)]
pub enum BookingAttempt {
    Created(Booking),
    /// The requested tour date does not exist.
    DateNotFound,
    /// Fewer seats remain than were requested.
    NotEnoughSeats { available: i32 },
}
