use axum::{
    extract::State,
    response::{IntoResponse, Redirect},
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{action::ActionResult, api::ErrorDto},
    server::{
        controller::util::input::ActionInput,
        error::action::ActionError,
        model::{
            action::{SignInInput, TestMessageInput},
            app::AppState,
            auth::SignInSocial,
        },
        service::{auth::SocialProvider, message::echo_message},
    },
};

pub static ACTION_TAG: &str = "action";

/// Start signing in with GitHub
///
/// Requests a GitHub authorization URL for the callback URL, `/dashboard` unless given, and
/// redirects the browser to it.
///
/// # Responses
/// - 303 (See Other): Redirect to the GitHub authorization page
/// - 400 (Bad Request): Malformed input, body holds `validationErrors`
/// - 403 (Forbidden): The callback URL is not on this application's origin
/// - 500 (Internal Server Error): No sign-in URL was issued, body holds `serverError`
#[utoipa::path(
    post,
    path = "/api/actions/sign-in",
    tag = ACTION_TAG,
    request_body(content = SignInInput, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Redirect to the GitHub authorization page"),
        (status = 400, description = "Input failed validation"),
        (status = 403, description = "Untrusted callback URL", body = ErrorDto),
        (status = 500, description = "No sign-in URL was issued")
    ),
)]
pub async fn sign_in(
    State(state): State<AppState>,
    ActionInput(input): ActionInput<SignInInput>,
) -> Result<impl IntoResponse, ActionError> {
    let provider = SocialProvider::Github;

    let SignInSocial { url } = state
        .auth
        .sign_in_social(provider, &input.callback_url)
        .await?;

    let Some(url) = url else {
        return Err(ActionError::SignInUrlMissing(provider));
    };

    Ok(Redirect::to(url.as_str()))
}

/// Sign the current session out
///
/// Invalidates the session and redirects to the home page.
///
/// # Responses
/// - 303 (See Other): Signed out, redirect to `/`
/// - 500 (Internal Server Error): The session could not be removed from the store
#[utoipa::path(
    post,
    path = "/api/actions/sign-out",
    tag = ACTION_TAG,
    responses(
        (status = 303, description = "Signed out, redirect to the home page"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn sign_out(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, ActionError> {
    state.auth.sign_out(&session).await?;

    Ok(Redirect::to("/"))
}

/// Echo a test message
///
/// Logs the message and returns it wrapped in `data.serverResponse`.
///
/// # Responses
/// - 200 (OK): `{ "data": { "serverResponse": "Server got: \"<message>\"" } }`
/// - 400 (Bad Request): Missing or empty message, body holds `validationErrors`
#[utoipa::path(
    post,
    path = "/api/actions/test-message",
    tag = ACTION_TAG,
    request_body(content = TestMessageInput, content_type = "application/json"),
    responses(
        (status = 200, description = "The echoed message, wrapped in `data`"),
        (status = 400, description = "Input failed validation")
    ),
)]
pub async fn send_test_message(
    ActionInput(input): ActionInput<TestMessageInput>,
) -> Result<impl IntoResponse, ActionError> {
    Ok(Json(ActionResult::data(echo_message(input))))
}
