use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Redirect},
};
use serde::Deserialize;
use tower_sessions::Session;
use url::form_urlencoded;
use utoipa::IntoParams;

use crate::{
    model::api::ErrorDto,
    server::{
        error::{auth::AuthError, Error},
        model::{app::AppState, session::user::SessionUserId},
        service::auth::SocialProvider,
    },
};

pub static AUTH_TAG: &str = "auth";

#[derive(Deserialize, IntoParams)]
pub struct CallbackParams {
    /// Authorization code issued by the provider
    pub code: Option<String>,
    /// OAuth state issued with the authorization URL
    pub state: Option<String>,
    /// Error reported by the provider, such as `access_denied`
    pub error: Option<String>,
}

/// Callback route the provider redirects to after the user authorized the application
///
/// Exchanges the code, signs the user in by storing their ID in a fresh session and
/// redirects to the callback URL given when signing in.
///
/// # Responses
/// - 307 (Temporary Redirect): Signed in, redirect to the callback URL. When the provider
///   reports an error, redirect to `/?error=<error>` instead
/// - 400 (Bad Request): Missing, unknown or expired OAuth state
/// - 404 (Not Found): Unknown or unconfigured provider
/// - 500 (Internal Server Error): Token exchange, provider API or database failure
#[utoipa::path(
    get,
    path = "/api/auth/callback/{provider}",
    tag = AUTH_TAG,
    params(
        ("provider" = String, Path, description = "Social provider, `github`"),
        CallbackParams
    ),
    responses(
        (status = 307, description = "Signed in, redirect to the callback URL"),
        (status = 400, description = "Invalid OAuth state", body = ErrorDto),
        (status = 404, description = "Provider not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn callback(
    State(state): State<AppState>,
    session: Session,
    Path(provider): Path<String>,
    Query(params): Query<CallbackParams>,
) -> Result<impl IntoResponse, Error> {
    let provider: SocialProvider = provider.parse()?;

    if let Some(error) = params.error {
        let error: String = form_urlencoded::byte_serialize(error.as_bytes()).collect();

        return Ok(Redirect::temporary(&format!("/?error={}", error)));
    }

    let (Some(code), Some(oauth_state)) = (params.code, params.state) else {
        return Err(AuthError::InvalidState.into());
    };

    let outcome = state
        .auth
        .handle_callback(provider, &code, &oauth_state)
        .await?;

    // A sign-in always starts under a new session ID
    session.cycle_id().await?;
    SessionUserId::insert(&session, outcome.user.id).await?;

    Ok(Redirect::temporary(&outcome.callback_url))
}
