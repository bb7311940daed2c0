//! Route guard tests through the assembled router.

use axum::{
    body::Body,
    http::{header::COOKIE, header::LOCATION, Request, StatusCode},
};
use devpad_test_utils::prelude::*;
use tower::ServiceExt;

use crate::util::{app, body_text, TestContextExt};

fn get(path: &str, cookie: Option<&str>) -> Request<Body> {
    let mut req = Request::builder().method("GET").uri(path);
    if let Some(cookie) = cookie {
        req = req.header(COOKIE, cookie);
    }

    req.body(Body::empty()).unwrap()
}

/// Expect the dashboard to redirect home without a session cookie
#[tokio::test]
async fn redirects_dashboard_without_session_cookie() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let app = app(test.app_state().unwrap());

    let resp = app.oneshot(get("/dashboard", None)).await.unwrap();

    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(resp.headers()[LOCATION], "/");

    Ok(())
}

/// Expect an empty session cookie or an unrelated cookie to count as signed out
#[tokio::test]
async fn redirects_dashboard_with_empty_session_cookie() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let state = test.app_state().unwrap();

    for cookie in ["devpad.session_token=", "theme=dark"] {
        let resp = app(state.clone())
            .oneshot(get("/dashboard/", Some(cookie)))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    }

    Ok(())
}

/// Expect any non-empty session cookie to reach the dashboard, its value is not verified
#[tokio::test]
async fn passes_dashboard_with_session_cookie() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let app = app(test.app_state().unwrap());

    let resp = app
        .oneshot(get("/dashboard", Some("devpad.session_token=not-a-real-session")))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_text(resp).await, "Hello!!");

    Ok(())
}

/// Expect unguarded routes to be served without a session cookie
#[tokio::test]
async fn passes_unprotected_routes() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let app = app(test.app_state().unwrap());

    let resp = app
        .oneshot(get("/api/docs/openapi.json", None))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}
