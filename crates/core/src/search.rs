//! Tour search filter parsing, region expansion, and sort orders.
//!
//! Search parameters arrive as raw query-string values. [`SearchFilter::parse`]
//! turns them into a validated filter that the repository layer can render
//! into SQL without further checks. Malformed price and duration bounds are
//! rejected; malformed rating, region, page, and limit values fall back to
//! defaults because the UI sends them from checkboxes and pagers.

use serde::Serialize;

use crate::error::CoreError;
use crate::pagination::page_offset;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Default number of search results per page.
pub const DEFAULT_SEARCH_LIMIT: i64 = 20;

/// Maximum number of search results per page.
pub const MAX_SEARCH_LIMIT: i64 = 100;

/// Only tours with this status name are returned by search.
pub const SEARCHABLE_STATUS: &str = "active";

/// Highest star rating a tour can be filtered by.
pub const MAX_RATING_BUCKET: i32 = 5;

// ---------------------------------------------------------------------------
// Regions
// ---------------------------------------------------------------------------

/// A named group of destination countries selectable in the search sidebar.
#[derive(Debug)]
pub struct Region {
    pub id: &'static str,
    pub name: &'static str,
    /// Country names as stored in `locations.country`, in both Ukrainian and
    /// English spellings.
    pub countries: &'static [&'static str],
}

pub const REGIONS: &[Region] = &[
    Region {
        id: "1",
        name: "Ukraine",
        countries: &["Україна", "Ukraine"],
    },
    Region {
        id: "2",
        name: "Europe",
        countries: &[
            "Франція", "Італія", "Іспанія", "Німеччина", "Польща", "Нідерланди", "Бельгія",
            "Швейцарія", "Австрія", "Чехія", "France", "Italy", "Spain", "Germany", "Poland",
            "Netherlands", "Belgium", "Switzerland", "Austria", "Czech Republic",
        ],
    },
    Region {
        id: "3",
        name: "Asia",
        countries: &[
            "Китай", "Японія", "Таїланд", "В'єтнам", "Індія", "Південна Корея", "Сінгапур",
            "Малайзія", "Індонезія", "Філіппіни", "China", "Japan", "Thailand", "Vietnam",
            "India", "South Korea", "Singapore", "Malaysia", "Indonesia", "Philippines",
        ],
    },
    Region {
        id: "4",
        name: "Americas",
        countries: &[
            "США", "Канада", "Мексика", "Бразилія", "Аргентина", "Чилі", "Перу", "Колумбія",
            "USA", "United States", "Canada", "Mexico", "Brazil", "Argentina", "Chile", "Peru",
            "Colombia",
        ],
    },
    Region {
        id: "5",
        name: "Middle East",
        countries: &[
            "ОАЕ", "Туреччина", "Єгипет", "Ізраїль", "Йорданія", "Саудівська Аравія", "Катар",
            "Кувейт", "UAE", "Turkey", "Egypt", "Israel", "Jordan", "Saudi Arabia", "Qatar",
            "Kuwait",
        ],
    },
    Region {
        id: "6",
        name: "Oceania",
        countries: &[
            "Австралія", "Нова Зеландія", "Фіджі", "Папуа-Нова Гвінея", "Вануату", "Australia",
            "New Zealand", "Fiji", "Papua New Guinea", "Vanuatu",
        ],
    },
];

/// Look up a region by its id (`"1"` .. `"6"`).
pub fn find_region(id: &str) -> Option<&'static Region> {
    REGIONS.iter().find(|r| r.id == id)
}

/// Expand a comma-separated list of region ids into the union of their
/// countries. Unknown ids are ignored; duplicates are removed.
pub fn countries_for_regions(raw: Option<&str>) -> Vec<&'static str> {
    let mut countries: Vec<&'static str> = Vec::new();
    for id in split_list(raw) {
        if let Some(region) = find_region(id) {
            for country in region.countries {
                if !countries.contains(country) {
                    countries.push(country);
                }
            }
        }
    }
    countries
}

// ---------------------------------------------------------------------------
// Ratings
// ---------------------------------------------------------------------------

/// A half-open rating interval `[min, max)`; `max = None` means unbounded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingBucket {
    pub min: f64,
    pub max: Option<f64>,
}

impl RatingBucket {
    /// The bucket selected by an `N stars` checkbox.
    pub fn for_stars(stars: i32) -> Self {
        if stars >= MAX_RATING_BUCKET {
            Self {
                min: f64::from(MAX_RATING_BUCKET),
                max: None,
            }
        } else {
            Self {
                min: f64::from(stars),
                max: Some(f64::from(stars + 1)),
            }
        }
    }
}

/// Parse a comma-separated list of star ratings. Entries that are not
/// integers in `1..=5` are skipped.
pub fn parse_rating_buckets(raw: Option<&str>) -> Vec<RatingBucket> {
    let mut buckets = Vec::new();
    for entry in split_list(raw) {
        let Ok(stars) = entry.parse::<i32>() else {
            continue;
        };
        if !(1..=MAX_RATING_BUCKET).contains(&stars) {
            continue;
        }
        let bucket = RatingBucket::for_stars(stars);
        if !buckets.contains(&bucket) {
            buckets.push(bucket);
        }
    }
    buckets
}

// ---------------------------------------------------------------------------
// Sorting
// ---------------------------------------------------------------------------

/// Result ordering for tour search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    PriceAsc,
    PriceDesc,
    RatingDesc,
    TitleAsc,
    Newest,
    /// Best rated first, cheapest first among equals.
    #[default]
    Recommended,
}

impl SortOrder {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("price_asc") => Self::PriceAsc,
            Some("price_desc") => Self::PriceDesc,
            Some("rating_desc") => Self::RatingDesc,
            Some("title_asc") => Self::TitleAsc,
            Some("newest") => Self::Newest,
            _ => Self::Recommended,
        }
    }

    /// SQL `ORDER BY` body. Always ends in `t.id` so pages are stable.
    pub fn order_by(&self) -> &'static str {
        match self {
            Self::PriceAsc => "t.price ASC, t.id",
            Self::PriceDesc => "t.price DESC, t.id",
            Self::RatingDesc => "t.rating DESC, t.id",
            Self::TitleAsc => "t.title ASC, t.id",
            Self::Newest => "t.id DESC",
            Self::Recommended => "t.rating DESC, t.price ASC, t.id",
        }
    }
}

// ---------------------------------------------------------------------------
// Filter
// ---------------------------------------------------------------------------

/// Raw query-string values for tour search, borrowed from the request.
#[derive(Debug, Default, Clone, Copy)]
pub struct RawSearchParams<'a> {
    pub title: Option<&'a str>,
    pub min_price: Option<&'a str>,
    pub max_price: Option<&'a str>,
    pub min_duration: Option<&'a str>,
    pub max_duration: Option<&'a str>,
    pub ratings: Option<&'a str>,
    pub region: Option<&'a str>,
    pub page: Option<&'a str>,
    pub limit: Option<&'a str>,
    pub sort_by: Option<&'a str>,
}

/// A validated tour search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchFilter {
    /// Trimmed, non-empty free text matched against title and description.
    pub title: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    /// Duration bounds in whole days.
    pub min_duration: Option<i32>,
    pub max_duration: Option<i32>,
    pub ratings: Vec<RatingBucket>,
    /// Destination countries expanded from the selected regions.
    pub countries: Vec<&'static str>,
    pub sort: SortOrder,
    pub page: i64,
    pub limit: i64,
}

impl Default for SearchFilter {
    fn default() -> Self {
        Self {
            title: None,
            min_price: None,
            max_price: None,
            min_duration: None,
            max_duration: None,
            ratings: Vec::new(),
            countries: Vec::new(),
            sort: SortOrder::default(),
            page: 1,
            limit: DEFAULT_SEARCH_LIMIT,
        }
    }
}

impl SearchFilter {
    pub fn parse(raw: &RawSearchParams<'_>) -> Result<Self, CoreError> {
        let title = raw
            .title
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string);

        let min_price = parse_price(raw.min_price, "minPrice")?;
        let max_price = parse_price(raw.max_price, "maxPrice")?;
        if let (Some(min), Some(max)) = (min_price, max_price) {
            if min > max {
                return Err(CoreError::Validation(
                    "minPrice cannot be greater than maxPrice".into(),
                ));
            }
        }

        let min_duration = parse_duration(raw.min_duration, "minDuration")?;
        let max_duration = parse_duration(raw.max_duration, "maxDuration")?;
        if let (Some(min), Some(max)) = (min_duration, max_duration) {
            if min > max {
                return Err(CoreError::Validation(
                    "minDuration cannot be greater than maxDuration".into(),
                ));
            }
        }

        Ok(Self {
            title,
            min_price,
            max_price,
            min_duration,
            max_duration,
            ratings: parse_rating_buckets(raw.ratings),
            countries: countries_for_regions(raw.region),
            sort: SortOrder::parse(raw.sort_by),
            page: parse_page(raw.page),
            limit: parse_limit(raw.limit),
        })
    }

    pub fn offset(&self) -> i64 {
        page_offset(self.page, self.limit)
    }
}

/// Echo of the filters the client asked for, returned with search results.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppliedFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_duration: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_duration: Option<i32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub regions: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ratings: Vec<String>,
}

impl AppliedFilters {
    pub fn new(raw: &RawSearchParams<'_>, filter: &SearchFilter) -> Self {
        Self {
            title: filter.title.clone(),
            min_price: filter.min_price,
            max_price: filter.max_price,
            min_duration: filter.min_duration,
            max_duration: filter.max_duration,
            regions: split_list(raw.region).map(str::to_string).collect(),
            ratings: split_list(raw.ratings).map(str::to_string).collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Escape `%`, `_` and `\` so user text is matched literally by `ILIKE`.
pub fn escape_like(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Build a `%text%` substring pattern for `ILIKE`.
pub fn contains_pattern(input: &str) -> String {
    format!("%{}%", escape_like(input))
}

fn split_list(raw: Option<&str>) -> impl Iterator<Item = &str> {
    raw.unwrap_or("")
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

fn present(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|s| !s.is_empty())
}

fn parse_price(raw: Option<&str>, field: &str) -> Result<Option<f64>, CoreError> {
    let Some(value) = present(raw) else {
        return Ok(None);
    };
    match value.parse::<f64>() {
        Ok(price) if price.is_finite() && price >= 0.0 => Ok(Some(price)),
        _ => Err(CoreError::Validation(format!(
            "{field} must be a non-negative number"
        ))),
    }
}

fn parse_duration(raw: Option<&str>, field: &str) -> Result<Option<i32>, CoreError> {
    let Some(value) = present(raw) else {
        return Ok(None);
    };
    match value.parse::<i32>() {
        Ok(days) if days >= 1 => Ok(Some(days)),
        _ => Err(CoreError::Validation(format!(
            "{field} must be a whole number of days (at least 1)"
        ))),
    }
}

fn parse_page(raw: Option<&str>) -> i64 {
    match present(raw).map(str::parse::<i64>) {
        Some(Ok(page)) if page >= 1 => page,
        _ => 1,
    }
}

fn parse_limit(raw: Option<&str>) -> i64 {
    match present(raw).map(str::parse::<i64>) {
        Some(Ok(limit)) if (1..=MAX_SEARCH_LIMIT).contains(&limit) => limit,
        _ => DEFAULT_SEARCH_LIMIT,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
