use chrono::{Duration, Utc};

use crate::server::{
    data::verification::VerificationRepository,
    error::{auth::AuthError, Error},
    model::auth::{OAuthStateData, SignInSocial},
    service::auth::{AuthService, SocialProvider},
};

/// How long an issued authorization URL stays usable.
pub const OAUTH_STATE_TTL_MINUTES: i64 = 10;

impl AuthService {
    /// Requests a sign-in URL for `provider`.
    ///
    /// Persists the generated OAuth `state` with the callback URL so the callback can restore
    /// it, expiring after [`OAUTH_STATE_TTL_MINUTES`].
    ///
    /// # Arguments
    /// - `provider` - Provider to sign in with
    /// - `callback_url` - Where to send the browser once signed in
    ///
    /// # Returns
    /// - `Ok(SignInSocial { url: Some(_) })` - Authorization URL to redirect to
    /// - `Ok(SignInSocial { url: None })` - The provider is not configured
    /// - `Err(Error::AuthError(AuthError::UntrustedCallbackUrl))` - The callback URL is not a
    ///   relative path or on the application's origin
    /// - `Err(Error::DbErr)` - Storing the OAuth state failed
    pub async fn sign_in_social(
        &self,
        provider: SocialProvider,
        callback_url: &str,
    ) -> Result<SignInSocial, Error> {
        if !self.is_trusted_callback_url(callback_url) {
            return Err(AuthError::UntrustedCallbackUrl(callback_url.to_string()).into());
        }

        let Some(github) = self.provider(provider) else {
            return Ok(SignInSocial { url: None });
        };

        let (url, state) = github.authorize_url();

        let value = serde_json::to_string(&OAuthStateData {
            callback_url: callback_url.to_string(),
        })?;

        let verification_repo = VerificationRepository::new(&self.db);
        verification_repo.delete_expired().await?;
        verification_repo
            .create(
                state.secret(),
                value,
                Utc::now().naive_utc() + Duration::minutes(OAUTH_STATE_TTL_MINUTES),
            )
            .await?;

        Ok(SignInSocial { url: Some(url) })
    }
}
