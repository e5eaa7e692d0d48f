//! Booking rules: status values, seat limits, price computation.

use crate::error::CoreError;

pub const BOOKING_STATUS_PENDING: &str = "pending";
pub const BOOKING_STATUS_CONFIRMED: &str = "confirmed";
pub const BOOKING_STATUS_CANCELLED: &str = "cancelled";

/// All valid booking statuses, matching the `ck_bookings_status` constraint.
pub const VALID_BOOKING_STATUSES: &[&str] = &[
    BOOKING_STATUS_PENDING,
    BOOKING_STATUS_CONFIRMED,
    BOOKING_STATUS_CANCELLED,
];

/// Upper bound on seats reserved by a single booking.
pub const MAX_SEATS_PER_BOOKING: i32 = 20;

pub fn validate_seat_request(seats: i32) -> Result<(), CoreError> {
    if (1..=MAX_SEATS_PER_BOOKING).contains(&seats) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "seats must be between 1 and {MAX_SEATS_PER_BOOKING}"
        )))
    }
}

/// Total price for `seats` at `unit_price`, rounded to cents.
pub fn compute_total_price(unit_price: f64, seats: i32) -> f64 {
    (unit_price * f64::from(seats) * 100.0).round() / 100.0
}
