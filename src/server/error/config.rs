use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::InternalServerError;

/// Errors raised while validating the environment at startup.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required variable is unset or empty.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
    /// A variable is set but does not match its schema.
    #[error("Invalid value for environment variable {var}: {reason}")]
    InvalidEnvValue {
        /// Name of the variable
        var: String,
        /// Why the value was rejected
        reason: String,
    },
    /// Every issue found in the environment, in declaration order.
    #[error("Invalid environment configuration:\n{}", list_issues(.0))]
    InvalidEnvironment(Vec<ConfigError>),
}

impl ConfigError {
    /// Issues contained in this error, flattening [`ConfigError::InvalidEnvironment`].
    pub fn issues(&self) -> Vec<&ConfigError> {
        match self {
            Self::InvalidEnvironment(issues) => issues.iter().flat_map(|e| e.issues()).collect(),
            issue => vec![issue],
        }
    }

    /// Name of the environment variable this issue refers to, if it refers to a single one.
    pub fn var(&self) -> Option<&str> {
        match self {
            Self::MissingEnvVar(var) | Self::InvalidEnvValue { var, .. } => Some(var),
            Self::InvalidEnvironment(_) => None,
        }
    }
}

fn list_issues(issues: &[ConfigError]) -> String {
    issues
        .iter()
        .map(|issue| format!("  - {}", issue))
        .collect::<Vec<_>>()
        .join("\n")
}

impl IntoResponse for ConfigError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}
