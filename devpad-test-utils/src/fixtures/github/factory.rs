//! Factory functions for GitHub API response bodies.

use serde_json::{json, Value};

use crate::constant::TEST_GITHUB_ACCESS_TOKEN;

/// Body of a successful `POST /login/oauth/access_token` response.
pub fn mock_token_response() -> Value {
    json!({
        "access_token": TEST_GITHUB_ACCESS_TOKEN,
        "token_type": "bearer",
        "scope": "read:user,user:email"
    })
}

/// Body of `GET /user` for a profile with the given ID and public email.
///
/// Pass `None` as `email` to simulate a user hiding their email, leaving
/// `GET /user/emails` as the only source of an address.
pub fn mock_github_user(id: i64, email: Option<&str>) -> Value {
    json!({
        "login": format!("octocat{}", id),
        "id": id,
        "avatar_url": format!("https://avatars.githubusercontent.com/u/{}", id),
        "name": "The Octocat",
        "email": email
    })
}

/// Body of `GET /user/emails` containing a single primary address.
pub fn mock_github_emails(email: &str, verified: bool) -> Value {
    json!([
        {
            "email": "noreply@users.noreply.github.com",
            "primary": false,
            "verified": true
        },
        {
            "email": email,
            "primary": true,
            "verified": verified
        }
    ])
}
