use dioxus_logger::tracing;
use sea_orm::{ConnectionTrait, TransactionTrait};

use crate::server::{
    data::{
        account::{AccountRepository, NewAccount},
        user::{NewUser, UserRepository},
        verification::VerificationRepository,
    },
    error::{auth::AuthError, Error},
    model::{
        auth::{CallbackOutcome, OAuthStateData},
        github::GithubProfile,
    },
    service::auth::{provider::GithubToken, AuthService, SocialProvider},
};

impl AuthService {
    /// Completes an OAuth sign-in.
    ///
    /// Consumes the stored `state`, exchanges the code for an access token, fetches the
    /// provider profile and resolves it to a user, creating the user and linking the account
    /// on first sign-in.
    ///
    /// # Returns
    /// - `Ok(CallbackOutcome)` - The signed in user and where to send them
    /// - `Err(Error::AuthError(AuthError::ProviderNotConfigured))` - No credentials for `provider`
    /// - `Err(Error::AuthError(AuthError::InvalidState))` - Unknown, used or expired `state`
    /// - `Err(Error::AuthError(AuthError::TokenExchange))` - The provider rejected the code
    /// - `Err(Error::AuthError(AuthError::EmailNotFound))` - The profile has no email
    /// - `Err(Error::AuthError(AuthError::AccountNotLinked))` - The email belongs to another
    ///   user and is unverified
    /// - `Err(Error)` - Database or provider API failure
    pub async fn handle_callback(
        &self,
        provider: SocialProvider,
        code: &str,
        state: &str,
    ) -> Result<CallbackOutcome, Error> {
        let Some(github) = self.provider(provider) else {
            return Err(AuthError::ProviderNotConfigured(provider.to_string()).into());
        };

        let Some(verification) = VerificationRepository::new(&self.db).consume(state).await?
        else {
            return Err(AuthError::InvalidState.into());
        };
        let state_data: OAuthStateData = serde_json::from_str(&verification.value)?;

        let token = github.exchange_code(code).await?;
        let profile = github.fetch_profile(&token).await?;

        let txn = self.db.begin().await?;
        let user = get_or_create_user(&txn, provider, &profile, token).await?;
        txn.commit().await?;

        Ok(CallbackOutcome {
            user,
            callback_url: state_data.callback_url,
        })
    }
}

/// Resolves a provider profile to a user.
///
/// 1. The linked account's user, refreshing the stored token
/// 2. The user with the same email, linking the account if the provider verified the email
/// 3. A new user with a linked account
pub(super) async fn get_or_create_user<C: ConnectionTrait>(
    db: &C,
    provider: SocialProvider,
    profile: &GithubProfile,
    token: GithubToken,
) -> Result<entity::user::Model, Error> {
    let account_repo = AccountRepository::new(db);
    let user_repo = UserRepository::new(db);
    let account_id = profile.id.to_string();

    if let Some((account, maybe_user)) = account_repo
        .find_by_provider_account(provider.as_str(), &account_id)
        .await?
    {
        // Would only occur if the foreign key from account to user is not enforced
        let user = maybe_user.ok_or_else(|| {
            Error::InternalError(format!(
                "Failed to find user ID {} linked to {} account {}",
                account.user_id, provider, account_id
            ))
        })?;

        account_repo
            .update_access_token(account, Some(token.access_token), token.scope)
            .await?;

        return Ok(user);
    }

    let user = match user_repo.find_by_email(&profile.email).await? {
        Some(user) if profile.email_verified => {
            tracing::debug!(
                "Linking {} account {} to existing user {}",
                provider,
                account_id,
                user.id
            );
            user
        }
        Some(_) => return Err(AuthError::AccountNotLinked(profile.email.clone()).into()),
        None => {
            user_repo
                .create(NewUser {
                    name: profile.name.clone(),
                    email: profile.email.clone(),
                    email_verified: profile.email_verified,
                    image: profile.image.clone(),
                })
                .await?
        }
    };

    account_repo
        .create(NewAccount {
            user_id: user.id,
            provider_id: provider.as_str(),
            account_id: &account_id,
            access_token: Some(token.access_token),
            scope: token.scope,
        })
        .await?;

    Ok(user)
}
