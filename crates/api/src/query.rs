//! Shared query parameter types for API handlers.

use serde::Deserialize;
use tour_core::search::RawSearchParams;

/// `?page=&limit=` for paginated comment lists.
///
/// Values are clamped by the handler; non-numeric input is rejected by the
/// `Query` extractor.
#[derive(Debug, Deserialize)]
pub struct PageParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// `?ids=1,2,3` for `GET /tours/cards/by-ids`.
#[derive(Debug, Deserialize)]
pub struct IdsParams {
    pub ids: Option<String>,
}

/// Query parameters for `GET /search/semantic`.
#[derive(Debug, Deserialize)]
pub struct SemanticParams {
    pub q: Option<String>,
    pub price: Option<f64>,
    pub rating: Option<f64>,
    pub duration: Option<i32>,
    pub limit: Option<i64>,
}

/// `?limit=` for `GET /search/similar/{tour_id}`.
#[derive(Debug, Deserialize)]
pub struct LimitParams {
    pub limit: Option<i64>,
}

/// Raw query string of `GET /search`.
///
/// Kept as strings so that malformed numbers reach
/// [`tour_core::search::SearchFilter::parse`], which decides between a 400
/// and a silent fallback per field.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    pub title: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub min_duration: Option<String>,
    pub max_duration: Option<String>,
    pub ratings: Option<String>,
    pub region: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
    pub sort_by: Option<String>,
}

impl SearchQuery {
    pub fn as_raw(&self) -> RawSearchParams<'_> {
        RawSearchParams {
            title: self.title.as_deref(),
            min_price: self.min_price.as_deref(),
            max_price: self.max_price.as_deref(),
            min_duration: self.min_duration.as_deref(),
            max_duration: self.max_duration.as_deref(),
            ratings: self.ratings.as_deref(),
            region: self.region.as_deref(),
            page: self.page.as_deref(),
            limit: self.limit.as_deref(),
            sort_by: self.sort_by.as_deref(),
        }
    }
}

/// Parse a comma-separated id list. Blank entries are skipped; any other
/// non-integer entry is returned as the error.
pub fn parse_id_list(raw: &str) -> Result<Vec<i64>, String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<i64>().map_err(|_| s.to_string()))
        .collect()
}
