use veronica::{
    model::user::UserDto,
    server::{
        controller::{auth::logout, user::dashboard},
        model::session::user::SessionUserId,
    },
};

use super::*;

#[tokio::test]
/// Expect 200 success with the signed-in user
async fn returns_user_for_signed_in_session() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_user_tables().build().await?;
    let user_model = test
        .user()
        .insert_user("Alp Arslan", "alp@example.com", "correct horse")
        .await?;
    SessionUserId::insert(&test.session, user_model.id)
        .await
        .unwrap();

    let result = dashboard(State(test.into_app_state()), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let user: UserDto = read_json(resp).await;
    assert_eq!(
        user,
        UserDto {
            id: user_model.id,
            name: "Alp Arslan".to_string(),
            email: "alp@example.com".to_string(),
        }
    );

    Ok(())
}

#[tokio::test]
/// Expect 307 redirect to login without a user in session
async fn redirects_to_login_when_signed_out() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;

    let result = dashboard(State(test.into_app_state()), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&resp), Some("/login"));

    Ok(())
}

#[tokio::test]
/// Expect 307 redirect to login and a cleared session when the user no longer exists
async fn redirects_to_login_for_deleted_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    SessionUserId::insert(&test.session, 42).await.unwrap();

    let result = dashboard(State(test.into_app_state()), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert!(SessionUserId::get(&test.session).await.unwrap().is_none());

    Ok(())
}

#[tokio::test]
/// Expect the dashboard to treat the session as signed out after logout
async fn redirects_to_login_after_logout() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_user_tables().build().await?;
    let user_model = test
        .user()
        .insert_user("Alp Arslan", "alp@example.com", "correct horse")
        .await?;
    SessionUserId::insert(&test.session, user_model.id)
        .await
        .unwrap();

    let _ = logout(test.session.clone()).await.unwrap().into_response();

    let result = dashboard(State(test.into_app_state()), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);

    Ok(())
}

#[tokio::test]
/// Expect 500 internal server error when the user store fails
async fn returns_internal_error_on_store_failure() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    SessionUserId::insert(&test.session, 1).await.unwrap();

    let result = dashboard(State(test.into_app_state()), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.unwrap_err().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
