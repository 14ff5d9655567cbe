//! Registration, login & logout endpoints.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Form, Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        auth::{FormErrorDto, LoginForm, LoginPageDto, RegisterForm},
    },
    server::{
        error::{form::FormError, Error},
        model::{
            app::AppState,
            session::{
                flash::{SessionFlash, FLASH_SUCCESS},
                user::SessionUserId,
            },
        },
        service::auth::AuthService,
        util::validate::{validate_login, validate_registration, PASSWORD_TOO_SHORT_MESSAGE},
    },
};

/// OpenAPI tag for registration, login & logout routes.
pub static AUTH_TAG: &str = "auth";

/// Flash shown on the login page after a successful registration.
pub const REGISTERED_MESSAGE: &str = "You have successfully registered. Please log in to continue";

/// Login page state
///
/// Returns the one-time success message left by a registration, if any. Reading the
/// page removes the message from the session.
#[utoipa::path(
    get,
    path = "/login",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Login page state", body = LoginPageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login_page(session: Session) -> Result<impl IntoResponse, Error> {
    let flash = SessionFlash::take(&session, FLASH_SUCCESS).await?;

    Ok((StatusCode::OK, Json(LoginPageDto { flash })))
}

/// Login with email & password
///
/// Validates the form, checks the credentials and binds the session to the user. The
/// session ID is rotated before the user ID is stored.
///
/// # Responses
/// - 303 (See Other): Signed in, redirect to the dashboard
/// - 401 (Unauthorized): Unknown email or wrong password, one shared message
/// - 422 (Unprocessable Entity): One or more fields failed validation
/// - 500 (Internal Server Error): User store or session failure
#[utoipa::path(
    post,
    path = "/login",
    tag = AUTH_TAG,
    request_body(content = LoginForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Signed in, redirect to /dashboard"),
        (status = 401, description = "Invalid email or password", body = FormErrorDto),
        (status = 422, description = "Form validation failed", body = FormErrorDto),
        (status = 500, description = "Internal server error", body = FormErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<impl IntoResponse, Error> {
    let input = match validate_login(&form, state.login_enforce_password_length) {
        Ok(input) => input,
        Err(err) => {
            if err.errors.get("password").map(String::as_str) == Some(PASSWORD_TOO_SHORT_MESSAGE)
            {
                tracing::debug!("Rejected login as the password is shorter than the minimum length");
            }

            return Err(err.into());
        }
    };

    let user = AuthService::new(&state.db)
        .login(&input)
        .await
        .map_err(|err| FormError::from_failure(err, input.old_input()))?;

    session.cycle_id().await?;
    SessionUserId::insert(&session, user.id).await?;

    tracing::info!(user_id = %user.id, "User logged in");

    Ok(Redirect::to("/dashboard"))
}

/// Register a new account
///
/// Validates the form, stores the user with a hashed password and leaves a success
/// message for the login page.
///
/// # Responses
/// - 303 (See Other): Registered, redirect to the login page
/// - 409 (Conflict): The email is already registered, generic message
/// - 422 (Unprocessable Entity): One or more fields failed validation
/// - 500 (Internal Server Error): User store or session failure
#[utoipa::path(
    post,
    path = "/register",
    tag = AUTH_TAG,
    request_body(content = RegisterForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Registered, redirect to /login"),
        (status = 409, description = "Registration failed", body = FormErrorDto),
        (status = 422, description = "Form validation failed", body = FormErrorDto),
        (status = 500, description = "Internal server error", body = FormErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<RegisterForm>,
) -> Result<impl IntoResponse, Error> {
    let input = validate_registration(&form)?;

    AuthService::new(&state.db)
        .register(&input)
        .await
        .map_err(|err| FormError::from_failure(err, input.old_input()))?;

    SessionFlash::set(&session, FLASH_SUCCESS, REGISTERED_MESSAGE).await?;

    Ok(Redirect::to("/login"))
}

/// Logs the user out by clearing their session
///
/// # Responses
/// - 307 (Temporary Redirect): Successfully logged out, redirect to login route
/// - 500 (Internal Server Error): There was an issue clearing the session
#[utoipa::path(
    get,
    path = "/logout",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Logged out, redirect to /login"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, Error> {
    // Flushing a session that was never stored fails, so only flush when there is state
    if !session.is_empty().await {
        let user_id = SessionUserId::remove(&session).await.ok().flatten();

        session.flush().await?;

        if let Some(user_id) = user_id {
            tracing::info!(user_id = %user_id, "User logged out");
        }
    }

    Ok(Redirect::temporary("/login"))
}
