use sea_orm::EntityTrait;
use veronica::server::{
    controller::auth::{register, REGISTERED_MESSAGE},
    error::auth::GENERIC_FAILURE_MESSAGE,
    model::session::flash::{SessionFlash, FLASH_SUCCESS},
    util::validate::{
        EMAIL_INVALID_MESSAGE, NAME_REQUIRED_MESSAGE, PASSWORD_TOO_SHORT_MESSAGE,
    },
};

use super::*;

#[tokio::test]
/// Expect 303 redirect to login, a success flash and a hashed password in the store
async fn redirects_to_login_on_success() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;

    let result = register(
        State(test.into_app_state()),
        test.session.clone(),
        register_form("Alp Arslan", "alp@example.com", "correct horse"),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), Some("/login"));

    let flash = SessionFlash::take(&test.session, FLASH_SUCCESS).await.unwrap();
    assert_eq!(flash.as_deref(), Some(REGISTERED_MESSAGE));

    let users = entity::prelude::User::find().all(&test.db).await?;
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].name, "Alp Arslan");
    assert_eq!(users[0].email, "alp@example.com");
    assert_ne!(users[0].password, "correct horse");
    assert!(users[0].password.starts_with("$argon2id$"));

    Ok(())
}

#[tokio::test]
/// Expect the name to be stored escaped for safe redisplay
async fn stores_sanitized_name() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;

    let result = register(
        State(test.into_app_state()),
        test.session.clone(),
        register_form("  <b>Alp</b>  ", "alp@example.com", "correct horse"),
    )
    .await;

    assert!(result.is_ok());

    let users = entity::prelude::User::find().all(&test.db).await?;
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].name, "&lt;b&gt;Alp&lt;/b&gt;");

    Ok(())
}

#[tokio::test]
/// Expect 409 with the generic message and no second row for a registered email
async fn returns_conflict_for_duplicate_email() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_user("Someone Else", "alp@example.com", "another password")
        .build()
        .await?;

    let result = register(
        State(test.into_app_state()),
        test.session.clone(),
        register_form("Alp Arslan", "alp@example.com", "correct horse"),
    )
    .await;

    assert!(result.is_err());
    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let body: FormErrorDto = read_json(resp).await;
    assert_eq!(
        body.errors.get("auth_error").map(String::as_str),
        Some(GENERIC_FAILURE_MESSAGE)
    );
    assert_eq!(body.old.get("name").map(String::as_str), Some("Alp Arslan"));
    assert_eq!(
        body.old.get("email").map(String::as_str),
        Some("alp@example.com")
    );

    let users = entity::prelude::User::find().all(&test.db).await?;
    assert_eq!(users.len(), 1);

    let flash = SessionFlash::take(&test.session, FLASH_SUCCESS).await.unwrap();
    assert!(flash.is_none());

    Ok(())
}

#[tokio::test]
/// Expect 422 with every failing field reported at once and nothing stored
async fn returns_unprocessable_with_all_field_errors() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;

    let result = register(
        State(test.into_app_state()),
        test.session.clone(),
        register_form("   ", "not-an-email", "short"),
    )
    .await;

    assert!(result.is_err());
    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: FormErrorDto = read_json(resp).await;
    assert_eq!(body.errors.len(), 3);
    assert_eq!(
        body.errors.get("name").map(String::as_str),
        Some(NAME_REQUIRED_MESSAGE)
    );
    assert_eq!(
        body.errors.get("email").map(String::as_str),
        Some(EMAIL_INVALID_MESSAGE)
    );
    assert_eq!(
        body.errors.get("password").map(String::as_str),
        Some(PASSWORD_TOO_SHORT_MESSAGE)
    );
    assert_eq!(
        body.old.get("email").map(String::as_str),
        Some("not-an-email")
    );
    assert!(!body.old.contains_key("password"));

    let users = entity::prelude::User::find().all(&test.db).await?;
    assert!(users.is_empty());

    Ok(())
}

#[tokio::test]
/// Expect 500 with the generic message when the user store fails
async fn returns_internal_error_on_store_failure() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = register(
        State(test.into_app_state()),
        test.session.clone(),
        register_form("Alp Arslan", "alp@example.com", "correct horse"),
    )
    .await;

    assert!(result.is_err());
    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: FormErrorDto = read_json(resp).await;
    assert_eq!(
        body.errors.get("auth_error").map(String::as_str),
        Some(GENERIC_FAILURE_MESSAGE)
    );

    Ok(())
}
