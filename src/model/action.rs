use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Generic message returned to the client when an action fails on the server.
///
/// The underlying cause is only logged, never sent to the client.
pub const DEFAULT_SERVER_ERROR_MESSAGE: &str =
    "Something went wrong while executing the operation.";

/// Where the browser lands after signing in when no callback URL is given.
pub const DEFAULT_SIGN_IN_CALLBACK_URL: &str = "/dashboard";

/// Result body of a server action.
///
/// Exactly one of the fields is present: `data` on success, `validationErrors` when the
/// input failed validation, or `serverError` when the action itself failed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionResult<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation_errors: Option<ValidationErrorsDto>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_error: Option<String>,
}

impl<T> ActionResult<T> {
    pub fn data(data: T) -> Self {
        Self {
            data: Some(data),
            validation_errors: None,
            server_error: None,
        }
    }

    pub fn validation_errors(errors: ValidationErrorsDto) -> Self {
        Self {
            data: None,
            validation_errors: Some(errors),
            server_error: None,
        }
    }

    pub fn server_error(message: impl Into<String>) -> Self {
        Self {
            data: None,
            validation_errors: None,
            server_error: Some(message.into()),
        }
    }
}

/// Validation errors for one input field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldErrorsDto {
    #[serde(rename = "_errors")]
    pub errors: Vec<String>,
}

/// Validation errors for a whole action input.
///
/// Serializes as `{ "_errors": [..], "<field>": { "_errors": [..] } }` where the root
/// `_errors` holds errors not tied to a single field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationErrorsDto {
    #[serde(rename = "_errors", default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
    #[serde(flatten)]
    pub fields: BTreeMap<String, FieldErrorsDto>,
}

/// Payload returned by the test message action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct TestMessageDto {
    /// The message echoed back by the server
    pub server_response: String,
}
