pub mod auth;
pub mod bookings;
pub mod comments;
pub mod favorites;
pub mod profile;
pub mod reviews;
pub mod search;
pub mod tours;
