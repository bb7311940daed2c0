use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::InternalServerError};

/// Errors raised by the sign-in, callback and sign-out flows.
#[derive(Error, Debug)]
pub enum AuthError {
    /// The callback URL is neither a relative path nor on the application's origin.
    #[error("Callback URL {0:?} is not trusted")]
    UntrustedCallbackUrl(String),
    /// The OAuth callback names a provider this application does not know.
    #[error("Unknown social provider {0:?}")]
    UnknownProvider(String),
    /// The OAuth callback names a provider without configured credentials.
    #[error("Social provider {0:?} is not configured")]
    ProviderNotConfigured(String),
    /// The OAuth `state` is missing, unknown, already used or expired.
    #[error("Failed to sign in user due to invalid or expired OAuth state")]
    InvalidState,
    /// Exchanging the authorization code for an access token failed.
    #[error("Failed to exchange authorization code for an access token: {0}")]
    TokenExchange(String),
    /// The provider profile carries no email address to identify the user by.
    #[error("Provider account {0:?} has no email address")]
    EmailNotFound(String),
    /// A user with the profile's email exists but the provider has not verified the address,
    /// so the account is not linked to them.
    #[error("Refusing to link provider account to user with unverified email {0:?}")]
    AccountNotLinked(String),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::UntrustedCallbackUrl(_) => {
                tracing::debug!("{}", self);

                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto::new("Invalid callbackURL")),
                )
                    .into_response()
            }
            Self::UnknownProvider(_) | Self::ProviderNotConfigured(_) => {
                tracing::debug!("{}", self);

                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorDto::new("Provider not found")),
                )
                    .into_response()
            }
            Self::InvalidState => {
                tracing::debug!("{}", self);

                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorDto::new(
                        "There was an issue signing you in, please try again.",
                    )),
                )
                    .into_response()
            }
            Self::EmailNotFound(_) => {
                tracing::debug!("{}", self);

                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorDto::new(
                        "Your GitHub account has no email address we can use.",
                    )),
                )
                    .into_response()
            }
            Self::AccountNotLinked(_) => {
                tracing::debug!("{}", self);

                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorDto::new(
                        "An account with this email already exists, verify the email on GitHub to link it.",
                    )),
                )
                    .into_response()
            }
            Self::TokenExchange(_) => InternalServerError(self).into_response(),
        }
    }
}
