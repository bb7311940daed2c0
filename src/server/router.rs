//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `POST /api/actions/sign-in` - Start signing in with GitHub
/// - `POST /api/actions/sign-out` - Sign the current session out
/// - `POST /api/actions/test-message` - Echo a test message
/// - `GET /api/auth/callback/{provider}` - OAuth callback handler
///
/// The OpenAPI specification is served at `/api/docs/openapi.json` and Swagger UI at
/// `/api/docs`.
///
/// # Returns
/// An Axum `Router<AppState>` ready to be given its state and session layer and merged into
/// the main application router.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "devpad", description = "devpad API"), tags(
        (name = controller::action::ACTION_TAG, description = "Server actions invoked by the client"),
        (name = controller::auth::AUTH_TAG, description = "Authentication API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::action::sign_in))
        .routes(routes!(controller::action::sign_out))
        .routes(routes!(controller::action::send_test_message))
        .routes(routes!(controller::auth::callback))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
