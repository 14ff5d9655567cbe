//! Endpoints for the signed-in user.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, user::UserDto},
    server::{
        controller::util::get_user::get_user_from_session,
        error::{auth::AuthError, Error},
        model::app::AppState,
    },
};

/// OpenAPI tag for signed-in user routes.
pub static USER_TAG: &str = "user";

/// Dashboard for the signed-in user
///
/// Signed-out visitors, and sessions pointing at a user that no longer exists, are sent
/// back to the login page.
#[utoipa::path(
    get,
    path = "/dashboard",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Signed-in user", body = UserDto),
        (status = 307, description = "Not signed in, redirect to /login"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn dashboard(
    State(state): State<AppState>,
    session: Session,
) -> Result<Response, Error> {
    match get_user_from_session(&state, &session).await {
        Ok(user) => Ok((StatusCode::OK, Json(user)).into_response()),
        Err(Error::AuthError(AuthError::UserNotInSession))
        | Err(Error::AuthError(AuthError::UserNotInDatabase(_))) => {
            Ok(Redirect::temporary("/login").into_response())
        }
        Err(err) => Err(err),
    }
}
