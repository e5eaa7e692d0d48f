//! Deterministic feature embedding for tours.
//!
//! A tour is described by its title, price, rating, and duration. The title
//! is tokenized and feature-hashed into a fixed number of buckets, then the
//! numeric attributes are appended as scaled components. The resulting vector
//! is stored in a pgvector column and searched through an HNSW index, so the
//! same function must be used for indexing and for queries.

/// Total vector length, matching the `vector(64)` column.
pub const EMBEDDING_DIMENSION: usize = 64;

/// Number of leading dimensions used for hashed title tokens.
pub const TEXT_DIMENSION: usize = EMBEDDING_DIMENSION - 4;

/// Relative weight of the numeric tail against the normalized text part.
pub const NUMERIC_WEIGHT: f32 = 0.5;

/// Default number of neighbours returned by semantic search.
pub const DEFAULT_NEIGHBOURS: i64 = 10;

/// Maximum number of neighbours returned by semantic search.
pub const MAX_NEIGHBOURS: i64 = 50;

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Split text into lowercase alphanumeric tokens. Works for Cyrillic too.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(|t| t.to_lowercase())
        .collect()
}

fn fnv1a(bytes: &[u8]) -> u64 {
    bytes.iter().fold(FNV_OFFSET, |hash, b| {
        (hash ^ u64::from(*b)).wrapping_mul(FNV_PRIME)
    })
}

/// Hashed bag-of-tokens, L2-normalized. All zeros when there are no tokens.
fn text_features(text: &str) -> [f32; TEXT_DIMENSION] {
    let mut buckets = [0f32; TEXT_DIMENSION];
    for token in tokenize(text) {
        let hash = fnv1a(token.as_bytes());
        let index = (hash % TEXT_DIMENSION as u64) as usize;
        // Top bit picks the sign so colliding tokens partly cancel.
        let sign = if hash >> 63 == 0 { 1.0 } else { -1.0 };
        buckets[index] += sign;
    }

    let norm = buckets.iter().map(|v| v * v).sum::<f32>().sqrt();
    if norm > 0.0 {
        for v in &mut buckets {
            *v /= norm;
        }
    }
    buckets
}

/// Clamp to `[0, 1]`; NaN and infinities become 0 so the vector stays
/// representable in pgvector.
fn unit(value: f64) -> f32 {
    if value.is_finite() {
        value.clamp(0.0, 1.0) as f32
    } else {
        0.0
    }
}

fn scaled_rating(rating: f64) -> f32 {
    unit(rating / 5.0)
}

fn scaled_price(price: f64) -> f32 {
    unit(price.max(0.0).ln_1p() / 10.0)
}

fn scaled_duration(days: i32) -> f32 {
    unit(f64::from(days) / 30.0)
}

fn assemble(
    text: &str,
    rating: Option<f64>,
    price: Option<f64>,
    duration_days: Option<i32>,
    bias: f32,
) -> Vec<f32> {
    let mut vector = Vec::with_capacity(EMBEDDING_DIMENSION);
    vector.extend_from_slice(&text_features(text));
    vector.push(rating.map_or(0.0, scaled_rating) * NUMERIC_WEIGHT);
    vector.push(price.map_or(0.0, scaled_price) * NUMERIC_WEIGHT);
    vector.push(duration_days.map_or(0.0, scaled_duration) * NUMERIC_WEIGHT);
    vector.push(bias * NUMERIC_WEIGHT);
    vector
}

/// Embed a stored tour. Returns `None` when the title has no tokens.
pub fn embed_tour(title: &str, price: f64, rating: f64, duration_days: i32) -> Option<Vec<f32>> {
    if tokenize(title).is_empty() {
        return None;
    }
    Some(assemble(
        title,
        Some(rating),
        Some(price),
        Some(duration_days),
        1.0,
    ))
}

/// Embed a free-form search query. Missing numeric parts are zero.
pub fn embed_query(
    text: &str,
    price: Option<f64>,
    rating: Option<f64>,
    duration_days: Option<i32>,
) -> Vec<f32> {
    assemble(text, rating, price, duration_days, 1.0)
}

/// Render a vector as a pgvector text literal, e.g. `[0.1,0.2]`.
///
/// Bound as text and cast with `$n::vector` in SQL.
pub fn to_pgvector_literal(vector: &[f32]) -> String {
    let parts: Vec<String> = vector.iter().map(|v| v.to_string()).collect();
    format!("[{}]", parts.join(","))
}
