//! Row models and DTOs, one module per table group.

pub mod booking;
pub mod comment;
pub mod embedding;
pub mod favorite;
pub mod review;
pub mod search;
pub mod session;
pub mod tour;
pub mod user;
