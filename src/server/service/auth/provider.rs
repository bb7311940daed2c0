//! GitHub OAuth client and REST API calls.

use dioxus_logger::tracing;
use oauth2::{
    basic::BasicClient, AuthUrl, AuthorizationCode, ClientId, ClientSecret, CsrfToken,
    EndpointNotSet, EndpointSet, RedirectUrl, Scope, TokenResponse, TokenUrl,
};
use reqwest::header::{ACCEPT, USER_AGENT};
use url::Url;

use crate::server::{
    error::{auth::AuthError, Error},
    model::github::{GithubEmail, GithubProfile, GithubUser},
};

/// Scopes requested from GitHub.
pub const GITHUB_SCOPES: [&str; 2] = ["read:user", "user:email"];

pub const GITHUB_WEB_URL: &str = "https://github.com";
pub const GITHUB_API_URL: &str = "https://api.github.com";

const GITHUB_USER_AGENT: &str = "devpad";

type GithubOAuthClient =
    BasicClient<EndpointSet, EndpointNotSet, EndpointNotSet, EndpointNotSet, EndpointSet>;

/// Access token granted by GitHub for a signed in user.
#[derive(Debug, Clone)]
pub struct GithubToken {
    pub access_token: String,
    /// Granted scopes as reported by GitHub, comma separated
    pub scope: Option<String>,
}

/// Client for the GitHub OAuth app and the REST endpoints used to identify users.
#[derive(Clone)]
pub struct GithubProvider {
    oauth: GithubOAuthClient,
    http: reqwest::Client,
    api_url: Url,
}

impl GithubProvider {
    /// Create the client.
    ///
    /// # Arguments
    /// - `web_url` - Base of the OAuth endpoints, `https://github.com` outside of tests
    /// - `api_url` - Base of the REST API, `https://api.github.com` outside of tests
    /// - `redirect_url` - Callback URL registered for the OAuth app
    pub fn new(
        client_id: &str,
        client_secret: &str,
        web_url: &str,
        api_url: &str,
        redirect_url: &str,
    ) -> Result<Self, Error> {
        let web_url = web_url.trim_end_matches('/');

        let oauth = BasicClient::new(ClientId::new(client_id.to_string()))
            .set_client_secret(ClientSecret::new(client_secret.to_string()))
            .set_auth_uri(AuthUrl::new(format!("{}/login/oauth/authorize", web_url))?)
            .set_token_uri(TokenUrl::new(format!(
                "{}/login/oauth/access_token",
                web_url
            ))?)
            .set_redirect_uri(RedirectUrl::new(redirect_url.to_string())?);

        // The token endpoint must not follow redirects
        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()?;

        Ok(Self {
            oauth,
            http,
            api_url: Url::parse(api_url)?,
        })
    }

    /// Authorization URL with a fresh random `state`.
    pub fn authorize_url(&self) -> (Url, CsrfToken) {
        GITHUB_SCOPES
            .iter()
            .fold(
                self.oauth.authorize_url(CsrfToken::new_random),
                |request, scope| request.add_scope(Scope::new(scope.to_string())),
            )
            .url()
    }

    /// Exchange the authorization code from the callback for an access token.
    pub async fn exchange_code(&self, code: &str) -> Result<GithubToken, Error> {
        let token = self
            .oauth
            .exchange_code(AuthorizationCode::new(code.to_string()))
            .request_async(&self.http)
            .await
            .map_err(|e| AuthError::TokenExchange(e.to_string()))?;

        let scope = token.scopes().map(|scopes| {
            scopes
                .iter()
                .map(|scope| scope.as_str())
                .collect::<Vec<_>>()
                .join(",")
        });

        Ok(GithubToken {
            access_token: token.access_token().secret().to_string(),
            scope,
        })
    }

    /// Fetch the profile of the token's owner.
    ///
    /// The email list is only needed when it holds a better address than the profile, so a
    /// failure to fetch it is logged rather than returned.
    ///
    /// # Returns
    /// - `Ok(GithubProfile)` - Profile with a resolved email address
    /// - `Err(Error::AuthError(AuthError::EmailNotFound))` - Neither the profile nor the
    ///   email list has an address
    /// - `Err(Error::HttpError)` - `GET /user` failed
    pub async fn fetch_profile(&self, token: &GithubToken) -> Result<GithubProfile, Error> {
        let user: GithubUser = self.get(&token.access_token, "user").await?;

        let emails: Vec<GithubEmail> = match self.get(&token.access_token, "user/emails").await {
            Ok(emails) => emails,
            Err(e) => {
                tracing::warn!("Failed to fetch emails for GitHub user {}: {}", user.id, e);
                Vec::new()
            }
        };

        let login = user.login.clone();

        GithubProfile::resolve(user, &emails).ok_or_else(|| AuthError::EmailNotFound(login).into())
    }

    async fn get<T: serde::de::DeserializeOwned>(
        &self,
        access_token: &str,
        path: &str,
    ) -> Result<T, Error> {
        let url = self.api_url.join(path)?;

        let body = self
            .http
            .get(url)
            .bearer_auth(access_token)
            .header(ACCEPT, "application/vnd.github+json")
            .header(USER_AGENT, GITHUB_USER_AGENT)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(body)
    }
}
