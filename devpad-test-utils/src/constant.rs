//! Constant values used across tests for the auth service configuration.
//!
//! None of these are real credentials.

/// Base URL the application is served from during tests.
pub static TEST_BASE_URL: &str = "http://localhost:8080";

/// Secret used to sign session cookies during tests, 32 characters long.
pub static TEST_AUTH_SECRET: &str = "test_auth_secret_0123456789abcde";

/// Mock GitHub OAuth app client ID.
pub static TEST_GITHUB_CLIENT_ID: &str = "github_client_id";

/// Mock GitHub OAuth app client secret.
pub static TEST_GITHUB_CLIENT_SECRET: &str = "github_client_secret";

/// Access token returned by the mock GitHub token endpoint.
pub static TEST_GITHUB_ACCESS_TOKEN: &str = "gho_test_access_token";

/// GitHub user ID used by the default mock profile.
pub static TEST_GITHUB_USER_ID: i64 = 1;

/// Email used by the default mock profile.
pub static TEST_GITHUB_EMAIL: &str = "octocat@example.com";
