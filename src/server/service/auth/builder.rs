use sea_orm::DatabaseConnection;
use url::Url;

use crate::server::{
    config::{Config, BETTER_AUTH_URL},
    error::{config::ConfigError, Error},
    service::auth::{
        provider::{GithubProvider, GITHUB_API_URL, GITHUB_WEB_URL},
        AuthService, SocialProvider,
    },
};

/// Builder for [`AuthService`].
///
/// A provider without credentials is left unconfigured, sign-in requests for it return no
/// authorization URL.
pub struct AuthServiceBuilder {
    base_url: Option<String>,
    github: Option<(String, String)>,
    github_web_url: String,
    github_api_url: String,
}

impl AuthServiceBuilder {
    pub(super) fn new() -> Self {
        Self {
            base_url: None,
            github: None,
            github_web_url: GITHUB_WEB_URL.to_string(),
            github_api_url: GITHUB_API_URL.to_string(),
        }
    }

    /// Configure the builder from the validated environment.
    pub fn from_config(config: &Config) -> Self {
        Self::new()
            .base_url(config.auth_url.as_str())
            .github(&config.github_client_id, &config.github_client_secret)
    }

    /// Base URL the application is served from, used for the OAuth redirect URI and to
    /// decide which callback URLs are trusted.
    pub fn base_url(mut self, base_url: &str) -> Self {
        self.base_url = Some(base_url.to_string());
        self
    }

    /// Credentials of the GitHub OAuth app.
    pub fn github(mut self, client_id: &str, client_secret: &str) -> Self {
        self.github = Some((client_id.to_string(), client_secret.to_string()));
        self
    }

    /// Serve both the GitHub OAuth and REST endpoints from `url`, for tests against a mock
    /// server.
    pub fn github_endpoints(mut self, url: &str) -> Self {
        self.github_web_url = url.to_string();
        self.github_api_url = url.to_string();
        self
    }

    /// Build the service.
    ///
    /// # Returns
    /// - `Ok(AuthService)` - Service ready to use
    /// - `Err(Error::ConfigError)` - No base URL was set
    /// - `Err(Error::UrlError)` - The base URL or a GitHub endpoint is not a valid URL
    pub fn build(self, db: DatabaseConnection) -> Result<AuthService, Error> {
        let Some(base_url) = self.base_url else {
            return Err(ConfigError::MissingEnvVar(BETTER_AUTH_URL.to_string()).into());
        };
        let base_url = Url::parse(&base_url)?;

        let github = match self.github {
            Some((client_id, client_secret)) => Some(GithubProvider::new(
                &client_id,
                &client_secret,
                &self.github_web_url,
                &self.github_api_url,
                &redirect_url(&base_url, SocialProvider::Github),
            )?),
            None => None,
        };

        Ok(AuthService {
            db,
            base_url,
            github,
        })
    }
}

/// Callback URL the provider redirects to, `{base_url}/api/auth/callback/{provider}`.
pub fn redirect_url(base_url: &Url, provider: SocialProvider) -> String {
    format!(
        "{}/api/auth/callback/{}",
        base_url.as_str().trim_end_matches('/'),
        provider
    )
}
