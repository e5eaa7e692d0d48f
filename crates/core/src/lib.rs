//! Domain logic for the tour booking backend.
//!
//! This crate performs no IO. It holds the error type, shared type aliases,
//! and the pure rules (search filter parsing, pagination, booking and
//! feedback validation, tour embeddings, static asset caching) that both the
//! repository layer and the HTTP layer rely on.

pub mod booking;
pub mod embedding;
pub mod error;
pub mod feedback;
pub mod pagination;
pub mod roles;
pub mod search;
pub mod static_assets;
pub mod types;
pub mod validation;
