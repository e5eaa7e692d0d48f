//! Handlers for the `/bookings` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use tour_core::booking::validate_seat_request;
use tour_core::error::CoreError;
use tour_db::models::booking::{Booking, BookingAttempt, CreateBooking, UserBooking};
use tour_db::repositories::BookingRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::{AuthUser, MaybeAuthUser};
use crate::middleware::validated_json::ValidatedJson;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/bookings
///
/// Book seats on a tour date. Signed-in callers get the booking linked to
/// their account; anonymous callers book as guests.
pub async fn create_booking(
    State(state): State<AppState>,
    caller: MaybeAuthUser,
    ValidatedJson(input): ValidatedJson<CreateBooking>,
) -> AppResult<(StatusCode, Json<DataResponse<Booking>>)> {
    validate_seat_request(input.seats)?;

    match BookingRepo::create(&state.pool, caller.user_id(), &input).await? {
        BookingAttempt::Created(booking) => {
            tracing::info!(
                booking_id = booking.id,
                tour_date_id = booking.tour_date_id,
                seats = booking.seats,
                user_id = ?booking.user_id,
                "Booking created"
            );
            Ok((StatusCode::CREATED, Json(DataResponse { data: booking })))
        }
        BookingAttempt::DateNotFound => Err(AppError::Core(CoreError::not_found(
            "TourDate",
            input.tour_date_id,
        ))),
        BookingAttempt::NotEnoughSeats { available } => Err(AppError::BadRequest(format!(
            "Not enough seats available: requested {}, available {available}",
            input.seats
        ))),
    }
}

/// GET /api/v1/bookings
///
/// The caller's bookings, newest first.
pub async fn list_my_bookings(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<DataResponse<Vec<UserBooking>>>> {
    let bookings = BookingRepo::list_for_user(&state.pool, auth_user.user_id).await?;
    Ok(Json(DataResponse { data: bookings }))
}
