//! Configuration errors.

use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::InternalServerError;

/// Startup configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required variable is unset or empty.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
    /// A variable is set but could not be parsed.
    #[error("Invalid value for environment variable {var}: {reason}")]
    InvalidEnvValue {
        /// Variable name
        var: String,
        /// What was expected
        reason: String,
    },
}

impl IntoResponse for ConfigError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}
