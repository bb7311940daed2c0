use axum::{
    extract::{Path, Query, State},
    http::{header::LOCATION, StatusCode},
    response::IntoResponse,
};
use devpad::server::{
    controller::auth::{callback, CallbackParams},
    model::{app::AppState, session::user::SessionUserId},
    service::auth::SocialProvider,
};
use sea_orm::EntityTrait;

use super::*;

/// Issue a sign-in URL and return the OAuth `state` it carries
async fn sign_in_state(state: &AppState) -> String {
    let url = state
        .auth
        .sign_in_social(SocialProvider::Github, "/dashboard")
        .await
        .unwrap()
        .url
        .unwrap();

    url.query_pairs()
        .find(|(key, _)| key == "state")
        .map(|(_, value)| value.into_owned())
        .unwrap()
}

fn params(oauth_state: &str) -> CallbackParams {
    CallbackParams {
        code: Some("code".to_string()),
        state: Some(oauth_state.to_string()),
        error: None,
    }
}

/// Mock GitHub to sign the default test user in `times` times
fn github_sign_in(times: usize) -> TestBuilder {
    TestBuilder::new()
        .with_auth_tables()
        .with_token_endpoint(github_factory::mock_token_response(), times)
        .with_user_endpoint(
            github_factory::mock_github_user(TEST_GITHUB_USER_ID, None),
            times,
        )
        .with_emails_endpoint(
            github_factory::mock_github_emails(TEST_GITHUB_EMAIL, true),
            times,
        )
}

/// Expect a 307 redirect to the callback URL with the new user stored in session
#[tokio::test]
async fn signs_in_new_user() -> Result<(), TestError> {
    let test = github_sign_in(1).build().await?;
    let state = test.app_state().unwrap();
    let oauth_state = sign_in_state(&state).await;

    let resp = callback(
        State(state),
        test.session.clone(),
        Path("github".to_string()),
        Query(params(&oauth_state)),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(resp.headers()[LOCATION], "/dashboard");

    let users = entity::prelude::User::find().all(&test.db).await?;
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].email, TEST_GITHUB_EMAIL);

    let session_user_id = SessionUserId::get(&test.session).await.unwrap();
    assert_eq!(session_user_id, Some(users[0].id));

    // The OAuth state is single use
    assert!(entity::prelude::Verification::find()
        .all(&test.db)
        .await?
        .is_empty());
    test.assert_mocks();

    Ok(())
}

/// Expect later sign-ins to reuse the user and account created by the first
#[tokio::test]
async fn reuses_user_on_later_sign_in() -> Result<(), TestError> {
    let test = github_sign_in(2).build().await?;
    let state = test.app_state().unwrap();

    for _ in 0..2 {
        let oauth_state = sign_in_state(&state).await;

        let resp = callback(
            State(state.clone()),
            test.session.clone(),
            Path("github".to_string()),
            Query(params(&oauth_state)),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    }

    let users = entity::prelude::User::find().all(&test.db).await?;
    let accounts = entity::prelude::Account::find().all(&test.db).await?;

    assert_eq!(users.len(), 1);
    assert_eq!(accounts.len(), 1);
    assert_eq!(accounts[0].user_id, users[0].id);
    test.assert_mocks();

    Ok(())
}

/// Expect a 400 for a state that was never issued, without contacting GitHub
#[tokio::test]
async fn rejects_unknown_state() -> Result<(), TestError> {
    let test = github_sign_in(0).build().await?;
    let state = test.app_state().unwrap();

    let resp = callback(
        State(state),
        test.session.clone(),
        Path("github".to_string()),
        Query(params("unknown")),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(SessionUserId::get(&test.session).await.unwrap().is_none());
    test.assert_mocks();

    Ok(())
}

/// Expect a state to be rejected once it has been used
#[tokio::test]
async fn rejects_reused_state() -> Result<(), TestError> {
    let test = github_sign_in(1).build().await?;
    let state = test.app_state().unwrap();
    let oauth_state = sign_in_state(&state).await;

    let first = callback(
        State(state.clone()),
        test.session.clone(),
        Path("github".to_string()),
        Query(params(&oauth_state)),
    )
    .await
    .into_response();
    let second = callback(
        State(state),
        test.session.clone(),
        Path("github".to_string()),
        Query(params(&oauth_state)),
    )
    .await
    .into_response();

    assert_eq!(first.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(second.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect a 400 when GitHub redirects back without a code or state
#[tokio::test]
async fn rejects_missing_code() -> Result<(), TestError> {
    let test = TestBuilder::new().with_auth_tables().build().await?;
    let state = test.app_state().unwrap();

    let resp = callback(
        State(state),
        test.session.clone(),
        Path("github".to_string()),
        Query(CallbackParams {
            code: None,
            state: None,
            error: None,
        }),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect the provider's error to be passed on to the home page
#[tokio::test]
async fn redirects_home_on_provider_error() -> Result<(), TestError> {
    let test = TestBuilder::new().with_auth_tables().build().await?;
    let state = test.app_state().unwrap();

    let resp = callback(
        State(state),
        test.session.clone(),
        Path("github".to_string()),
        Query(CallbackParams {
            code: None,
            state: None,
            error: Some("access_denied".to_string()),
        }),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(resp.headers()[LOCATION], "/?error=access_denied");

    Ok(())
}

/// Expect a 404 for a provider that does not exist
#[tokio::test]
async fn rejects_unknown_provider() -> Result<(), TestError> {
    let test = TestBuilder::new().with_auth_tables().build().await?;
    let state = test.app_state().unwrap();

    let resp = callback(
        State(state),
        test.session.clone(),
        Path("gitlab".to_string()),
        Query(params("state")),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
