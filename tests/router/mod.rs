//! End-to-end tests driving the full router with a cookie-carrying client.

use axum::{
    body::Body,
    http::{
        header::{CONTENT_TYPE, COOKIE, SET_COOKIE},
        Method, Request, StatusCode,
    },
    response::Response,
    Router,
};
use tower::ServiceExt;
use tower_sessions::{MemoryStore, SessionManagerLayer};
use veronica::{
    model::{auth::LoginPageDto, user::UserDto},
    server::{controller::auth::REGISTERED_MESSAGE, router::routes},
};
use veronica_test_utils::prelude::*;

use crate::util::{location, read_json, TestContextExt};

fn app(test: &TestContext) -> Router {
    let session = SessionManagerLayer::new(MemoryStore::default()).with_secure(false);

    routes().layer(session).with_state(test.into_app_state())
}

fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(Method::GET).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }

    builder.body(Body::empty()).unwrap()
}

fn post_form(uri: &str, body: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }

    builder.body(Body::from(body.to_string())).unwrap()
}

/// The `name=value` pair of the session cookie set by a response, if any.
fn session_cookie(resp: &Response) -> Option<String> {
    resp.headers()
        .get(SET_COOKIE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(str::to_string)
}

#[tokio::test]
/// Expect the index to redirect to the login page
async fn index_redirects_to_login() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;

    let resp = app(&test).oneshot(get("/", None)).await.unwrap();

    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&resp), Some("/login"));

    Ok(())
}

#[tokio::test]
/// Expect the OpenAPI document to list the auth routes
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;

    let resp = app(&test)
        .oneshot(get("/api/docs/openapi.json", None))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let doc: serde_json::Value = read_json(resp).await;
    assert!(doc["paths"]["/login"]["post"].is_object());
    assert!(doc["paths"]["/register"]["post"].is_object());
    assert!(doc["paths"]["/dashboard"]["get"].is_object());

    Ok(())
}

#[tokio::test]
/// Expect register, login, dashboard & logout to work together across requests
async fn register_login_logout_flow() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    let app = app(&test);

    // Register
    let resp = app
        .clone()
        .oneshot(post_form(
            "/register",
            "name=Alp+Arslan&email=alp%40example.com&password=correct+horse",
            None,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), Some("/login"));
    let cookie = session_cookie(&resp).expect("Registration should set a session cookie");

    // Flash is shown once
    let resp = app
        .clone()
        .oneshot(get("/login", Some(&cookie)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let page: LoginPageDto = read_json(resp).await;
    assert_eq!(page.flash.as_deref(), Some(REGISTERED_MESSAGE));

    let resp = app
        .clone()
        .oneshot(get("/login", Some(&cookie)))
        .await
        .unwrap();
    let page: LoginPageDto = read_json(resp).await;
    assert!(page.flash.is_none());

    // Login rotates the session ID
    let resp = app
        .clone()
        .oneshot(post_form(
            "/login",
            "email=alp%40example.com&password=correct+horse",
            Some(&cookie),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), Some("/dashboard"));
    let signed_in_cookie = session_cookie(&resp).expect("Login should set a session cookie");
    assert_ne!(signed_in_cookie, cookie);

    // Dashboard shows the new user
    let resp = app
        .clone()
        .oneshot(get("/dashboard", Some(&signed_in_cookie)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let user: UserDto = read_json(resp).await;
    assert_eq!(user.name, "Alp Arslan");
    assert_eq!(user.email, "alp@example.com");

    // Logout, then the dashboard is unauthenticated again
    let resp = app
        .clone()
        .oneshot(get("/logout", Some(&signed_in_cookie)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&resp), Some("/login"));

    let resp = app
        .clone()
        .oneshot(get("/dashboard", Some(&signed_in_cookie)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&resp), Some("/login"));

    Ok(())
}

#[tokio::test]
/// Expect a failed login to leave the session signed out
async fn failed_login_keeps_dashboard_locked() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_user("Alp Arslan", "alp@example.com", "correct horse")
        .build()
        .await?;
    let app = app(&test);

    let resp = app
        .clone()
        .oneshot(post_form(
            "/login",
            "email=alp%40example.com&password=battery+staple",
            None,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert!(session_cookie(&resp).is_none());

    let resp = app.oneshot(get("/dashboard", None)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);

    Ok(())
}
