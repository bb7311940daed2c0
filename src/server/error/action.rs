use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;

use crate::{
    model::action::{ActionResult, DEFAULT_SERVER_ERROR_MESSAGE},
    server::{error::Error, service::auth::SocialProvider, validation::ValidationErrors},
};

/// Errors returned by server actions.
///
/// Validation and action failures are reported in an [`ActionResult`] body. Anything else
/// is delegated to the [`Error`] it wraps.
#[derive(thiserror::Error, Debug)]
pub enum ActionError {
    /// The action input did not match its schema.
    #[error("Action input failed validation: {0}")]
    Validation(ValidationErrors),
    /// The provider did not hand out a sign-in URL.
    #[error("Failed to sign in with {0}")]
    SignInUrlMissing(SocialProvider),
    /// Error raised by the service the action calls into.
    #[error(transparent)]
    Server(Box<Error>),
}

impl From<Error> for ActionError {
    fn from(err: Error) -> Self {
        Self::Server(Box::new(err))
    }
}

impl IntoResponse for ActionError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(errors) => {
                tracing::debug!("{}", errors);

                (
                    StatusCode::BAD_REQUEST,
                    Json(ActionResult::<()>::validation_errors(errors.into())),
                )
                    .into_response()
            }
            Self::SignInUrlMissing(_) => {
                tracing::error!("{}", self);

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ActionResult::<()>::server_error(
                        DEFAULT_SERVER_ERROR_MESSAGE,
                    )),
                )
                    .into_response()
            }
            Self::Server(err) => err.into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use super::ActionError;
    use crate::server::{
        error::{auth::AuthError, Error},
        service::auth::SocialProvider,
        validation::ValidationErrors,
    };

    #[test]
    fn delegates_wrapped_server_errors() {
        let err = ActionError::from(Error::from(AuthError::InvalidState));

        assert!(matches!(
            &err,
            ActionError::Server(inner)
                if matches!(**inner, Error::AuthError(AuthError::InvalidState))
        ));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn maps_action_failures() {
        let resp = ActionError::Validation(ValidationErrors::root("Invalid input")).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let resp = ActionError::SignInUrlMissing(SocialProvider::Github).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
