//! Tour models: catalogue rows, dates, seats, and image DTOs.
//!
//! Tour-facing payloads serialize in camelCase for the storefront; seat
//! availability keeps snake_case field names.

use serde::Serialize;
use sqlx::FromRow;
use tour_core::types::{DbId, Timestamp};

/// A tour joined with its status name and card image.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tour {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub detailed_description: String,
    pub call_to_action: String,
    pub price: f64,
    pub rating: f64,
    pub total_seats: i32,
    pub status_id: DbId,
    pub status: String,
    pub image_src: String,
}

/// One scheduled departure of a tour, with route and remaining seats.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TourDateInfo {
    pub id: DbId,
    pub tour_id: DbId,
    pub date_from: Timestamp,
    pub date_to: Timestamp,
    /// Whole days between departure and return.
    pub duration: i32,
    pub from_location: String,
    pub to_location: String,
    pub to_country: String,
    /// Falls back to the tour's `total_seats` when no seat row exists.
    pub available_seats: i32,
}

/// A tour with all of its dates.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TourDetail {
    #[serde(flatten)]
    pub tour: Tour,
    pub dates: Vec<TourDateInfo>,
}

/// Compact card used in listing grids.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TourCard {
    pub id: DbId,
    pub title: String,
    pub price: f64,
    pub image_src: String,
}

/// Hero slider entry.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TourSwiper {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub call_to_action: String,
    pub image_src: String,
}

/// A row from `tour_card_images` or `tour_gallery_images`.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TourImage {
    pub id: DbId,
    pub tour_id: DbId,
    pub image_src: String,
}

/// Seat availability for one tour date.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TourSeats {
    pub id: DbId,
    pub tour_date_id: DbId,
    pub available_seats: i32,
    pub price: f64,
}
