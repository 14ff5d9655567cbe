//! Rejected form submissions.
//!
//! A rejected login or registration answers with the page state the form needs to
//! be shown again: the per-field messages and the non-secret values the user typed.

use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use crate::{
    model::auth::FormErrorDto,
    server::error::{
        auth::{AuthError, GENERIC_FAILURE_MESSAGE, INVALID_CREDENTIALS_MESSAGE},
        Error,
    },
};

/// Key under which failures not tied to a single field are reported.
pub const AUTH_ERROR_FIELD: &str = "auth_error";

/// Field name to message, one entry per failing field.
pub type FieldErrors = BTreeMap<String, String>;

/// Field name to previously entered value.
pub type OldInput = BTreeMap<String, String>;

/// A login or registration the user has to correct and submit again.
#[derive(thiserror::Error, Debug)]
#[error("Form submission rejected with status {status}")]
pub struct FormError {
    /// Response status
    pub status: StatusCode,
    /// Messages keyed by field, or by [`AUTH_ERROR_FIELD`]
    pub errors: FieldErrors,
    /// Submitted values to put back into the form
    pub old: OldInput,
}

impl FormError {
    /// Validation failed for one or more fields.
    pub fn invalid(errors: FieldErrors, old: OldInput) -> Self {
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            errors,
            old,
        }
    }

    /// The submission was valid but could not be carried out.
    pub fn rejected(status: StatusCode, message: &str, old: OldInput) -> Self {
        let mut errors = FieldErrors::new();
        errors.insert(AUTH_ERROR_FIELD.to_string(), message.to_string());

        Self {
            status,
            errors,
            old,
        }
    }

    /// Maps a failed login or registration to the form the user sees again.
    ///
    /// Wrong credentials and unknown accounts share one message. Store failures and
    /// email conflicts share another, with the cause kept in the logs only. Errors
    /// unrelated to the submission are returned unchanged.
    pub fn from_failure(err: Error, old: OldInput) -> Error {
        match err {
            Error::AuthError(AuthError::InvalidCredentials) => {
                tracing::debug!("{}", AuthError::InvalidCredentials);

                Self::rejected(StatusCode::UNAUTHORIZED, INVALID_CREDENTIALS_MESSAGE, old).into()
            }
            Error::AuthError(AuthError::EmailTaken) => {
                tracing::debug!("{}", AuthError::EmailTaken);

                Self::rejected(StatusCode::CONFLICT, GENERIC_FAILURE_MESSAGE, old).into()
            }
            Error::DbErr(err) => {
                tracing::error!("User store failure during authentication: {}", err);

                Self::rejected(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    GENERIC_FAILURE_MESSAGE,
                    old,
                )
                .into()
            }
            err => err,
        }
    }
}

impl IntoResponse for FormError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(FormErrorDto {
                errors: self.errors,
                old: self.old,
            }),
        )
            .into_response()
    }
}
