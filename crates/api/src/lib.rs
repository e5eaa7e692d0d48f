//! Tour booking API server library.
//!
//! Exposes the building blocks (config, state, error handling, routes,
//! semantic index startup) so integration tests and the binary entrypoint
//! can both access them.

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod indexer;
pub mod middleware;
pub mod query;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
