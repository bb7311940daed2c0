use axum::{
    extract::{FromRequest, Request},
    http::{header::CONTENT_TYPE, HeaderMap},
    Form, Json,
};
use serde::de::DeserializeOwned;

use crate::server::{
    error::action::ActionError,
    validation::{Validate, ValidationErrors},
};

/// Extracts a server action input from a JSON or form encoded body and validates it.
///
/// Requests without a `Content-Type` are treated as an empty input so actions whose fields
/// are all optional can be called without a body. Malformed bodies are reported as
/// validation errors on the input as a whole.
pub struct ActionInput<T: Validate>(pub T::Valid);

impl<S, T> FromRequest<S> for ActionInput<T>
where
    S: Send + Sync,
    T: Validate + DeserializeOwned + Send,
    T::Valid: Send,
{
    type Rejection = ActionError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let input = match content_type(req.headers()) {
            None => serde_json::from_str::<T>("{}")
                .map_err(|e| ActionError::Validation(ValidationErrors::root(e.to_string())))?,
            Some(mime) if is_json(&mime) => {
                let Json(input) = Json::<T>::from_request(req, state)
                    .await
                    .map_err(|e| ActionError::Validation(ValidationErrors::root(e.body_text())))?;
                input
            }
            Some(_) => {
                let Form(input) = Form::<T>::from_request(req, state)
                    .await
                    .map_err(|e| ActionError::Validation(ValidationErrors::root(e.body_text())))?;
                input
            }
        };

        input.validate().map(Self).map_err(ActionError::Validation)
    }
}

/// Media type of the request body without parameters, lowercased.
fn content_type(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(CONTENT_TYPE)?.to_str().ok()?;
    let mime = value.split(';').next().unwrap_or_default().trim();

    Some(mime.to_ascii_lowercase())
}

fn is_json(mime: &str) -> bool {
    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}

#[cfg(test)]
mod tests {
    use axum::{body::Body, extract::FromRequest, http::Request};

    use super::ActionInput;
    use crate::server::{error::action::ActionError, model::action::TestMessageInput};

    async fn extract(
        content_type: Option<&str>,
        body: &'static str,
    ) -> Result<ActionInput<TestMessageInput>, ActionError> {
        let mut req = Request::builder().method("POST").uri("/api/actions/test-message");
        if let Some(content_type) = content_type {
            req = req.header("content-type", content_type);
        }

        ActionInput::from_request(req.body(Body::from(body)).unwrap(), &()).await
    }

    #[tokio::test]
    async fn extracts_json_input() {
        let result = extract(Some("application/json"), r#"{"message":"hi"}"#).await;

        assert!(matches!(result, Ok(ActionInput(input)) if input.message == "hi"));
    }

    #[tokio::test]
    async fn extracts_form_input() {
        let result = extract(
            Some("application/x-www-form-urlencoded"),
            "message=Hello%2C+world%21",
        )
        .await;

        assert!(matches!(result, Ok(ActionInput(input)) if input.message == "Hello, world!"));
    }

    #[tokio::test]
    async fn validates_input_without_body() {
        let result = extract(None, "").await;

        let Err(ActionError::Validation(errors)) = result else {
            panic!("expected validation error");
        };
        assert_eq!(errors.field("message"), Some(&["Required".to_string()][..]));
    }

    #[tokio::test]
    async fn reports_malformed_json_as_root_error() {
        let result = extract(Some("application/json"), "{").await;

        let Err(ActionError::Validation(errors)) = result else {
            panic!("expected validation error");
        };
        assert_eq!(errors.root_errors().len(), 1);
    }
}
