//! Authentication errors.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Message for any failed login, whether the account exists or not.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password";
/// Message for registration or login failures caused by the user store.
pub const GENERIC_FAILURE_MESSAGE: &str = "An error occurred. Please try again";

/// Failures while signing in, registering or resolving the signed-in user.
#[derive(Error, Debug)]
pub enum AuthError {
    /// No user ID in the session.
    #[error("User ID is not present in session")]
    UserNotInSession,
    /// Session user ID has no matching row.
    #[error("User ID {0:?} not found in database despite having an active session")]
    UserNotInDatabase(i32),
    /// Unknown email or wrong password.
    #[error("Failed to login user due to unknown email or wrong password")]
    InvalidCredentials,
    /// Email is already registered.
    #[error("Failed to register user as the email address is already registered")]
    EmailTaken,
}

impl AuthError {
    fn user_not_found() -> Response {
        (
            StatusCode::NOT_FOUND,
            Json(ErrorDto {
                error: "User not found".to_string(),
            }),
        )
            .into_response()
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::UserNotInSession => {
                tracing::debug!("{}", Self::UserNotInSession);

                Self::user_not_found()
            }
            Self::UserNotInDatabase(user_id) => {
                tracing::debug!(
                    user_id = %user_id,
                    "{}",
                    self
                );

                Self::user_not_found()
            }
            Self::InvalidCredentials => {
                tracing::debug!("{}", self);

                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorDto {
                        error: INVALID_CREDENTIALS_MESSAGE.to_string(),
                    }),
                )
                    .into_response()
            }
            Self::EmailTaken => {
                tracing::debug!("{}", self);

                (
                    StatusCode::CONFLICT,
                    Json(ErrorDto {
                        error: GENERIC_FAILURE_MESSAGE.to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
