use serde::{Deserialize, Serialize};
use url::Url;

/// Value stored in a `verification` row while an OAuth sign-in is in flight, keyed by the
/// OAuth `state`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OAuthStateData {
    #[serde(rename = "callbackURL")]
    pub callback_url: String,
}

/// Result of requesting a social sign-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignInSocial {
    /// Provider authorization URL to send the browser to, `None` when the provider has no
    /// credentials configured.
    pub url: Option<Url>,
}

/// Result of a completed OAuth callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallbackOutcome {
    /// The signed in user
    pub user: entity::user::Model,
    /// Where the browser goes once the session is established
    pub callback_url: String,
}
