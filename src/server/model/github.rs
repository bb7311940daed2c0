use serde::Deserialize;

/// Response of `GET /user`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GithubUser {
    pub id: i64,
    pub login: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// Entry of the `GET /user/emails` response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GithubEmail {
    pub email: String,
    pub primary: bool,
    pub verified: bool,
}

/// GitHub user resolved to the identity the application signs in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GithubProfile {
    pub id: i64,
    /// Display name, falling back to the login when the user has not set one
    pub name: String,
    pub email: String,
    pub email_verified: bool,
    pub image: Option<String>,
}

impl GithubProfile {
    /// Resolve the profile from `GET /user` and, when fetched, `GET /user/emails`.
    ///
    /// The primary address from the email list wins over the public profile email since only
    /// the list reports verification. Returns `None` when neither source has an address.
    pub fn resolve(user: GithubUser, emails: &[GithubEmail]) -> Option<Self> {
        let primary = emails.iter().find(|e| e.primary);

        let (email, email_verified) = match (primary, user.email) {
            (Some(primary), _) => (primary.email.clone(), primary.verified),
            (None, Some(public)) => {
                let verified = emails.iter().any(|e| e.email == public && e.verified);
                (public, verified)
            }
            (None, None) => return None,
        };

        Some(Self {
            id: user.id,
            name: user.name.filter(|n| !n.is_empty()).unwrap_or(user.login),
            email,
            email_verified,
            image: user.avatar_url,
        })
    }
}
