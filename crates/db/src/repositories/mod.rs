//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods
//! that accept `&PgPool` as the first argument.

pub mod booking_repo;
pub mod comment_repo;
pub mod favorite_repo;
pub mod review_repo;
pub mod search_repo;
pub mod session_repo;
pub mod tour_embedding_repo;
pub mod tour_repo;
pub mod user_repo;

pub use booking_repo::BookingRepo;
pub use comment_repo::CommentRepo;
pub use favorite_repo::FavoriteRepo;
pub use review_repo::ReviewRepo;
pub use search_repo::SearchRepo;
pub use session_repo::SessionRepo;
pub use tour_embedding_repo::TourEmbeddingRepo;
pub use tour_repo::TourRepo;
pub use user_repo::UserRepo;
