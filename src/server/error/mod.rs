//! Error types for the Veronica server application.
//!
//! Domain errors (authentication, configuration, rejected forms) and library errors
//! are aggregated into [`Error`]. Every error implements `IntoResponse` so handlers
//! can return it directly, and internal detail is logged rather than sent to the
//! client.

pub mod auth;
pub mod config;
pub mod form;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError, form::FormError},
};

/// Main error type for the Veronica server application.
///
/// This enum aggregates all domain-specific error types and external library errors into a
/// single unified error type. It uses `thiserror`'s `#[from]` attribute to enable automatic
/// conversion from underlying error types via the `?` operator.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Authentication errors (credentials, session, user lookup)
/// - Rejected form submissions (validation, credentials, store failures)
/// - External library errors (database, sessions, password hashing)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (credentials, session/user validation).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Login or registration form rejected, carries the page state to redisplay.
    #[error(transparent)]
    FormError(#[from] FormError),
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Redis session store error (connection, command execution).
    #[error(transparent)]
    SessionRedisError(#[from] tower_sessions_redis_store::fred::prelude::Error),
    /// Password hashing error (malformed stored hash, hashing failure).
    #[error("Password hashing failed: {0}")]
    PasswordHashError(argon2::password_hash::Error),
    /// Blocking task for password hashing failed to complete.
    #[error(transparent)]
    JoinError(#[from] tokio::task::JoinError),
    /// I/O error (binding the listener, serving connections).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

impl From<argon2::password_hash::Error> for Error {
    fn from(err: argon2::password_hash::Error) -> Self {
        Self::PasswordHashError(err)
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 401/404/409 - For authentication failures
/// - 401/409/422/500 - For rejected forms, as decided by the form itself
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::FormError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
