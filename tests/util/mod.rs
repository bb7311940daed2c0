//! Helpers shared by the integration tests.

use axum::{body::Body, http::Response, routing::get, Router};
use devpad::server::{
    error::Error,
    middleware::{self, RouteMatcher},
    model::app::AppState,
    router,
    service::auth::AuthService,
    session::SESSION_COOKIE_NAME,
};
use devpad_test_utils::prelude::*;
use http_body_util::BodyExt;
use tower_sessions::{MemoryStore, SessionManagerLayer};

/// Builds application state on top of a [`TestContext`].
pub trait TestContextExt {
    /// State whose GitHub endpoints are served by the mock server
    fn app_state(&self) -> Result<AppState, Error>;

    /// State without GitHub credentials, so no sign-in URL is ever issued
    fn app_state_without_github(&self) -> Result<AppState, Error>;
}

impl TestContextExt for TestContext {
    fn app_state(&self) -> Result<AppState, Error> {
        let auth = AuthService::builder()
            .base_url(TEST_BASE_URL)
            .github(TEST_GITHUB_CLIENT_ID, TEST_GITHUB_CLIENT_SECRET)
            .github_endpoints(&self.server_url())
            .build(self.db.clone())?;

        Ok(AppState {
            db: self.db.clone(),
            auth,
        })
    }

    fn app_state_without_github(&self) -> Result<AppState, Error> {
        let auth = AuthService::builder()
            .base_url(TEST_BASE_URL)
            .build(self.db.clone())?;

        Ok(AppState {
            db: self.db.clone(),
            auth,
        })
    }
}

/// Server routes behind an in-memory session layer and the route guard, with a stand-in
/// `/dashboard` page.
pub fn app(state: AppState) -> Router {
    let session = SessionManagerLayer::new(MemoryStore::default())
        .with_name(SESSION_COOKIE_NAME)
        .with_secure(false);

    let routes = Router::new()
        .route("/dashboard", get(|| async { "Hello!!" }))
        .merge(router::routes().with_state(state))
        .layer(session);

    middleware::protect(routes, RouteMatcher::default())
}

/// Collect a response body into a string.
pub async fn body_text(resp: Response<Body>) -> String {
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();

    String::from_utf8(bytes.to_vec()).unwrap()
}
