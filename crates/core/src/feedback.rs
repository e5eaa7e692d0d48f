//! Rules for tour comments and reviews.

use crate::error::CoreError;

/// Minimum comment text length in characters.
pub const COMMENT_MIN_LEN: usize = 5;

/// Maximum comment text length in characters.
pub const COMMENT_MAX_LEN: usize = 1000;

/// Maximum review comment length in characters.
pub const REVIEW_COMMENT_MAX_LEN: usize = 2000;

pub const MIN_RATING: i32 = 1;
pub const MAX_RATING: i32 = 5;

/// Default and maximum page sizes for the comment list.
pub const DEFAULT_COMMENT_LIMIT: i64 = 10;
pub const MAX_COMMENT_LIMIT: i64 = 50;

fn validate_rating(rating: i32) -> Result<(), CoreError> {
    if (MIN_RATING..=MAX_RATING).contains(&rating) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "rating must be between {MIN_RATING} and {MAX_RATING}"
        )))
    }
}

/// Validate a comment body and optional star rating.
///
/// Length is counted in characters after trimming, so Cyrillic text is
/// measured the same way as ASCII.
pub fn validate_comment(text: &str, rating: Option<i32>) -> Result<(), CoreError> {
    let len = text.trim().chars().count();
    if !(COMMENT_MIN_LEN..=COMMENT_MAX_LEN).contains(&len) {
        return Err(CoreError::Validation(format!(
            "comment must be between {COMMENT_MIN_LEN} and {COMMENT_MAX_LEN} characters"
        )));
    }
    if let Some(rating) = rating {
        validate_rating(rating)?;
    }
    Ok(())
}

/// Validate a review rating and optional comment.
pub fn validate_review(rating: i32, comment: Option<&str>) -> Result<(), CoreError> {
    validate_rating(rating)?;
    if comment.is_some_and(|c| c.chars().count() > REVIEW_COMMENT_MAX_LEN) {
        return Err(CoreError::Validation(format!(
            "comment must be at most {REVIEW_COMMENT_MAX_LEN} characters"
        )));
    }
    Ok(())
}
