//! Raw inputs accepted by server actions and their validated forms.

use serde::Deserialize;
use utoipa::ToSchema;

pub use crate::model::action::DEFAULT_SIGN_IN_CALLBACK_URL;
use crate::server::validation::{min_length, required, Validate, ValidationErrors};

/// Input of the sign-in action.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct SignInInput {
    /// Path or same-origin URL to return to after signing in, defaults to `/dashboard`
    #[serde(rename = "callbackURL", default)]
    pub callback_url: Option<String>,
}

/// Validated sign-in input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignIn {
    pub callback_url: String,
}

impl Validate for SignInInput {
    type Valid = SignIn;

    fn validate(self) -> Result<SignIn, ValidationErrors> {
        // Forms always submit the field, an empty value means the default
        let callback_url = self
            .callback_url
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_SIGN_IN_CALLBACK_URL.to_string());

        Ok(SignIn { callback_url })
    }
}

/// Input of the test message action.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct TestMessageInput {
    /// Message echoed back by the server, at least one character
    #[serde(default)]
    pub message: Option<String>,
}

/// Validated test message input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestMessage {
    pub message: String,
}

impl Validate for TestMessageInput {
    type Valid = TestMessage;

    fn validate(self) -> Result<TestMessage, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let message = required(&mut errors, "message", self.message).unwrap_or_default();
        if errors.is_empty() {
            min_length(&mut errors, "message", &message, 1);
        }

        errors.into_result(TestMessage { message })
    }
}
