//! Tour search result rows.

use serde::Serialize;
use sqlx::FromRow;
use tour_core::types::DbId;

/// One tour in a filtered search result page.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub id: DbId,
    pub title: String,
    pub price: f64,
    pub rating: f64,
    pub image_src: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i32>,
    /// `"<destination>, <country>"` of the earliest date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Destination country of the earliest date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}
