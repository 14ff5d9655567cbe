//! HTTP controller endpoints for the Veronica web API.
//!
//! This module contains Axum handlers for registration, login, logout and the signed-in
//! dashboard. Controllers validate form input, call into the services, keep session state
//! through tower-sessions and are documented for OpenAPI with utoipa.

pub mod auth;
pub mod user;
pub mod util;
