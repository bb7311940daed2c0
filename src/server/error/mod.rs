//! Error types for the devpad server.
//!
//! Domain errors (configuration, authentication, server actions) are defined with
//! `thiserror` in their own modules and aggregated into [`Error`]. Every error implements
//! `IntoResponse` so handlers can return them with `?`.

pub mod action;
pub mod auth;
pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError},
};

/// Main error type for the devpad server.
///
/// Uses `#[from]` so the `?` operator converts library and domain errors automatically.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (callback URL, OAuth state, provider lookups).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Failed to parse a value from a string or other format.
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Internal error indicating a bug in devpad's code.
    #[error("Internal error, this indicates a bug in devpad: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// HTTP client error while talking to the OAuth provider's API.
    #[error(transparent)]
    HttpError(#[from] reqwest::Error),
    /// Invalid URL in configuration or provider endpoints.
    #[error(transparent)]
    UrlError(#[from] url::ParseError),
    /// JSON (de)serialization error for stored values.
    #[error(transparent)]
    JsonError(#[from] serde_json::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400/403/404 - For client-caused authentication failures, see [`AuthError`]
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wraps any displayable error into a 500 Internal Server Error response.
///
/// The error is logged; the client only receives a generic message so implementation
/// details don't leak.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto::new("Internal server error")),
        )
            .into_response()
    }
}
