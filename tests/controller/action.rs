use axum::{
    extract::State,
    http::{header::LOCATION, StatusCode},
    response::IntoResponse,
};
use devpad::{
    model::action::{ActionResult, TestMessageDto, DEFAULT_SERVER_ERROR_MESSAGE},
    server::{
        controller::{
            action::{send_test_message, sign_in, sign_out},
            util::input::ActionInput,
        },
        error::Error,
        model::{
            action::{SignInInput, TestMessageInput},
            session::user::SessionUserId,
        },
        validation::Validate,
    },
};
use sea_orm::EntityTrait;
use uuid::Uuid;

use super::*;
use crate::util::body_text;

/// Expect a 303 redirect to the GitHub authorization page when no callback URL is given
#[tokio::test]
async fn redirects_to_github_on_sign_in() -> Result<(), TestError> {
    let test = TestBuilder::new().with_auth_tables().build().await?;
    let state = test.app_state().unwrap();

    let input = SignInInput::default().validate().unwrap();
    let resp = sign_in(State(state), ActionInput(input))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    let location = resp.headers()[LOCATION].to_str().unwrap();
    assert!(location.starts_with(&format!("{}/login/oauth/authorize", test.server_url())));

    // The callback URL defaulted to the dashboard
    let verifications = entity::prelude::Verification::find().all(&test.db).await?;
    assert_eq!(verifications.len(), 1);
    assert_eq!(verifications[0].value, r#"{"callbackURL":"/dashboard"}"#);

    Ok(())
}

/// Expect a 500 server error without a redirect when no sign-in URL is issued
#[tokio::test]
async fn fails_without_sign_in_url() -> Result<(), TestError> {
    let test = TestBuilder::new().with_auth_tables().build().await?;
    let state = test.app_state_without_github().unwrap();

    let input = SignInInput::default().validate().unwrap();
    let resp = sign_in(State(state), ActionInput(input))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(resp.headers().get(LOCATION).is_none());

    let body: ActionResult<()> = serde_json::from_str(&body_text(resp).await).unwrap();
    assert_eq!(body.server_error.as_deref(), Some(DEFAULT_SERVER_ERROR_MESSAGE));

    Ok(())
}

/// Expect a 403 for a callback URL on another origin
#[tokio::test]
async fn rejects_untrusted_callback_url() -> Result<(), TestError> {
    let test = TestBuilder::new().with_auth_tables().build().await?;
    let state = test.app_state().unwrap();

    let input = SignInInput {
        callback_url: Some("https://evil.example/dashboard".to_string()),
    }
    .validate()
    .unwrap();
    let resp = sign_in(State(state), ActionInput(input))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    assert!(entity::prelude::Verification::find()
        .all(&test.db)
        .await?
        .is_empty());

    Ok(())
}

/// Expect callback URLs a browser would rewrite into another origin to be refused
#[tokio::test]
async fn rejects_callback_url_rewritten_off_site() -> Result<(), TestError> {
    let test = TestBuilder::new().with_auth_tables().build().await?;
    let state = test.app_state().unwrap();

    for callback_url in ["/\t/evil.example", "/\nfoo", "/%2F%2Fevil.example"] {
        let input = SignInInput {
            callback_url: Some(callback_url.to_string()),
        }
        .validate()
        .unwrap();
        let resp = sign_in(State(state.clone()), ActionInput(input))
            .await
            .into_response();

        assert_eq!(resp.status(), StatusCode::FORBIDDEN, "{:?}", callback_url);
        assert!(resp.headers().get(LOCATION).is_none());
    }

    assert!(entity::prelude::Verification::find()
        .all(&test.db)
        .await?
        .is_empty());

    Ok(())
}

/// Expect a 303 redirect home with the session cleared
#[tokio::test]
async fn redirects_home_on_sign_out() -> Result<(), Error> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let state = test.app_state()?;
    SessionUserId::insert(&test.session, Uuid::new_v4()).await?;

    let resp = sign_out(State(state), test.session.clone())
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers()[LOCATION], "/");
    assert!(SessionUserId::get(&test.session).await?.is_none());

    Ok(())
}

/// Expect signing out a session that was never signed in to still redirect home
#[tokio::test]
async fn redirects_home_on_sign_out_without_session() -> Result<(), Error> {
    let test = TestBuilder::new().build().await.unwrap();
    let state = test.app_state()?;

    let resp = sign_out(State(state), test.session.clone())
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers()[LOCATION], "/");

    Ok(())
}

/// Expect the message to be echoed back in `data.serverResponse`
#[tokio::test]
async fn echoes_test_message() {
    let input = TestMessageInput {
        message: Some("Hello, world!".to_string()),
    }
    .validate()
    .unwrap();

    let resp = send_test_message(ActionInput(input)).await.into_response();

    assert_eq!(resp.status(), StatusCode::OK);

    let body: ActionResult<TestMessageDto> = serde_json::from_str(&body_text(resp).await).unwrap();
    assert_eq!(
        body.data.unwrap().server_response,
        r#"Server got: "Hello, world!""#
    );
}
