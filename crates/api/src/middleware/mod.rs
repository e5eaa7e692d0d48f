//! Request extractors and middleware.
//!
//! - [`auth::AuthUser`] -- Extracts the authenticated user from a JWT Bearer token.
//! - [`auth::MaybeAuthUser`] -- Same, but an absent or bad token yields an anonymous caller.
//! - [`validated_json::ValidatedJson`] -- JSON body that must pass `validator` rules.
//! - [`static_cache::cache_static`] -- Cache-Control and ETag for `/static` files.

pub mod auth;
pub mod static_cache;
pub mod validated_json;
