//! Server action requests sent through the assembled router.

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, header::LOCATION, Request, StatusCode},
};
use devpad::model::action::{ActionResult, TestMessageDto};
use devpad_test_utils::prelude::*;
use tower::ServiceExt;

use crate::util::{app, body_text, TestContextExt};

fn post(path: &str, content_type: &str, body: &'static str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(path)
        .header(CONTENT_TYPE, content_type)
        .body(Body::from(body))
        .unwrap()
}

/// Expect the JSON test message action to echo the message
#[tokio::test]
async fn echoes_json_test_message() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let app = app(test.app_state().unwrap());

    let resp = app
        .oneshot(post(
            "/api/actions/test-message",
            "application/json",
            r#"{"message":"Hello, world!"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);

    let body: ActionResult<TestMessageDto> = serde_json::from_str(&body_text(resp).await).unwrap();
    assert_eq!(
        body.data.unwrap().server_response,
        r#"Server got: "Hello, world!""#
    );

    Ok(())
}

/// Expect an empty message to be reported as a validation error on `message`
#[tokio::test]
async fn rejects_empty_test_message() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let app = app(test.app_state().unwrap());

    let resp = app
        .oneshot(post(
            "/api/actions/test-message",
            "application/json",
            r#"{"message":""}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: ActionResult<TestMessageDto> = serde_json::from_str(&body_text(resp).await).unwrap();
    assert!(body.data.is_none());

    let errors = body.validation_errors.unwrap();
    assert!(!errors.fields["message"].errors.is_empty());

    Ok(())
}

/// Expect a malformed body to be reported as a validation error on the whole input
#[tokio::test]
async fn rejects_malformed_test_message() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let app = app(test.app_state().unwrap());

    let resp = app
        .oneshot(post(
            "/api/actions/test-message",
            "application/json",
            r#"{"message":"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: ActionResult<TestMessageDto> = serde_json::from_str(&body_text(resp).await).unwrap();
    assert!(!body.validation_errors.unwrap().errors.is_empty());

    Ok(())
}

/// Expect the sign-in form with an empty callback URL to redirect to GitHub
#[tokio::test]
async fn redirects_sign_in_form_to_github() -> Result<(), TestError> {
    let test = TestBuilder::new().with_auth_tables().build().await?;
    let app = app(test.app_state().unwrap());

    let resp = app
        .oneshot(post(
            "/api/actions/sign-in",
            "application/x-www-form-urlencoded",
            "callbackURL=",
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    let location = resp.headers()[LOCATION].to_str().unwrap();
    assert!(location.starts_with(&format!("{}/login/oauth/authorize", test.server_url())));

    Ok(())
}

/// Expect a form-encoded tab in the callback URL to be refused before GitHub is involved
#[tokio::test]
async fn rejects_sign_in_form_with_tab_in_callback_url() -> Result<(), TestError> {
    let test = TestBuilder::new().with_auth_tables().build().await?;
    let app = app(test.app_state().unwrap());

    let resp = app
        .oneshot(post(
            "/api/actions/sign-in",
            "application/x-www-form-urlencoded",
            "callbackURL=%2F%09%2Fevil.example",
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    assert!(resp.headers().get(LOCATION).is_none());

    Ok(())
}

/// Expect sign-in without GitHub credentials to fail without redirecting
#[tokio::test]
async fn reports_missing_sign_in_url() -> Result<(), TestError> {
    let test = TestBuilder::new().with_auth_tables().build().await?;
    let app = app(test.app_state_without_github().unwrap());

    let resp = app
        .oneshot(post("/api/actions/sign-in", "application/json", "{}"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(resp.headers().get(LOCATION).is_none());

    let body: ActionResult<()> = serde_json::from_str(&body_text(resp).await).unwrap();
    assert!(body.server_error.is_some());

    Ok(())
}

/// Expect sign-out to redirect home
#[tokio::test]
async fn redirects_sign_out_home() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let app = app(test.app_state().unwrap());

    let resp = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/actions/sign-out")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers()[LOCATION], "/");

    Ok(())
}

/// Expect every route to be documented in the OpenAPI document
#[tokio::test]
async fn documents_routes() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let app = app(test.app_state().unwrap());

    let resp = app
        .oneshot(
            Request::builder()
                .uri("/api/docs/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let doc: serde_json::Value = serde_json::from_str(&body_text(resp).await).unwrap();
    let paths = doc["paths"].as_object().unwrap();

    for path in [
        "/api/actions/sign-in",
        "/api/actions/sign-out",
        "/api/actions/test-message",
        "/api/auth/callback/{provider}",
    ] {
        assert!(paths.contains_key(path), "missing {}", path);
    }

    Ok(())
}
