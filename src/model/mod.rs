//! Data transfer objects shared by the HTTP surface.

pub mod api;
pub mod auth;
pub mod user;
