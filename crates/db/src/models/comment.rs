//! Tour comment model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tour_core::types::{DbId, Timestamp};

/// A comment joined with its author's name and avatar.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TourComment {
    pub id: DbId,
    pub tour_id: DbId,
    pub user_id: DbId,
    pub user_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_avatar: Option<String>,
    pub comment: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<i32>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A comment as seen by a particular caller.
#[derive(Debug, Clone, Serialize)]
pub struct CommentView {
    #[serde(flatten)]
    pub comment: TourComment,
    pub is_owner: bool,
}

impl CommentView {
    pub fn for_viewer(comment: TourComment, viewer: Option<DbId>) -> Self {
        let is_owner = viewer == Some(comment.user_id);
        Self { comment, is_owner }
    }
}

/// Body of `POST /comments`.
#[derive(Debug, Deserialize)]
pub struct CreateComment {
    pub tour_id: DbId,
    pub comment: String,
    pub rating: Option<i32>,
}

/// Body of `PUT /comments/{id}`.
#[derive(Debug, Deserialize)]
pub struct UpdateComment {
    pub comment: String,
    pub rating: Option<i32>,
}
