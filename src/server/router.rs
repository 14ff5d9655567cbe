//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All endpoints are registered here with their OpenAPI specifications, and
//! Swagger UI is configured to provide interactive API documentation at `/api/docs`.

use axum::{response::Redirect, routing::get, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /` - Redirect to the login page
/// - `GET /login` - Login page state with the one-time success message
/// - `POST /login` - Login with email & password
/// - `POST /register` - Register a new account
/// - `GET /logout` - Logout current user
/// - `GET /dashboard` - Signed-in user, or a redirect to the login page
///
/// The OpenAPI specification is served at `/api/docs/openapi.json` and Swagger UI at
/// `/api/docs`.
///
/// # Returns
/// An Axum `Router<AppState>` ready to have the state and session layer applied.
///
/// # Example
/// ```ignore
/// let app_state = AppState::new(db, &config);
/// let router = routes().layer(session).with_state(app_state);
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Veronica", description = "Veronica API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Registration, login & logout routes"),
        (name = controller::user::USER_TAG, description = "Signed-in user routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::login_page, controller::auth::login))
        .routes(routes!(controller::auth::register))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::user::dashboard))
        .split_for_parts();

    routes
        .route("/", get(|| async { Redirect::temporary("/login") }))
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
