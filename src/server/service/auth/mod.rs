//! Authentication service layer.
//!
//! [`AuthService`] drives social sign-in with GitHub: it issues authorization URLs, handles
//! the OAuth callback by linking or creating the user, and signs sessions out. OAuth `state`
//! values are persisted in the `verification` table so no session exists until a user has
//! signed in.

pub mod builder;
pub mod callback;
pub mod provider;
pub mod sign_in;

use std::{fmt, str::FromStr};

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use url::Url;

use crate::server::{
    error::{auth::AuthError, Error},
    model::session::user::SessionUserId,
    service::auth::{builder::AuthServiceBuilder, provider::GithubProvider},
};

/// OAuth providers users can sign in with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialProvider {
    Github,
}

impl SocialProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Github => "github",
        }
    }
}

impl fmt::Display for SocialProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SocialProvider {
    type Err = AuthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "github" => Ok(Self::Github),
            other => Err(AuthError::UnknownProvider(other.to_string())),
        }
    }
}

/// Service for signing users in with social providers and out again.
#[derive(Clone)]
pub struct AuthService {
    db: DatabaseConnection,
    base_url: Url,
    github: Option<GithubProvider>,
}

impl AuthService {
    /// Creates a builder for configuring an [`AuthService`].
    pub fn builder() -> AuthServiceBuilder {
        AuthServiceBuilder::new()
    }

    /// Base URL the application is served from.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The provider's client, `None` when it has no credentials configured.
    fn provider(&self, provider: SocialProvider) -> Option<&GithubProvider> {
        match provider {
            SocialProvider::Github => self.github.as_ref(),
        }
    }

    /// Whether the browser may be sent to `callback_url` after signing in.
    ///
    /// Relative paths and absolute URLs on the application's own origin are trusted.
    /// Rejected outright, as browsers may turn them into a protocol-relative
    /// `//evil.example`:
    /// - whitespace or control characters, which URL parsers strip
    /// - backslashes, which read as slashes
    /// - a path starting with an encoded slash or backslash
    pub fn is_trusted_callback_url(&self, callback_url: &str) -> bool {
        if callback_url
            .chars()
            .any(|c| c.is_control() || c.is_whitespace() || c == '\\')
        {
            return false;
        }

        if let Some(path) = callback_url.strip_prefix('/') {
            let lower = path.to_ascii_lowercase();
            if path.starts_with('/') || lower.starts_with("%2f") || lower.starts_with("%5c") {
                return false;
            }
        }

        // Relative paths resolve against the base URL and must stay on its origin
        self.base_url
            .join(callback_url)
            .map(|url| {
                (callback_url.starts_with('/') || Url::parse(callback_url).is_ok())
                    && url.origin() == self.base_url.origin()
            })
            .unwrap_or(false)
    }

    /// Signs the session out.
    ///
    /// Deletes the session record from the store and clears the session so the cookie is
    /// removed. A session that was never stored is a no-op.
    ///
    /// # Returns
    /// - `Ok(())` - Session invalidated
    /// - `Err(Error::SessionError)` - Deleting the record from the store failed
    pub async fn sign_out(&self, session: &Session) -> Result<(), Error> {
        // A malformed user ID must not keep the session alive
        let user_id = SessionUserId::get(session).await.ok().flatten();

        session.flush().await?;

        if let Some(user_id) = user_id {
            tracing::debug!("Signed out user {}", user_id);
        }

        Ok(())
    }
}
