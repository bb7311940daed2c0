//! Mock GitHub HTTP endpoints.

use mockito::Mock;
use serde_json::Value;

use crate::fixtures::github::GithubFixtures;

impl<'a> GithubFixtures<'a> {
    /// Mock `POST /login/oauth/access_token` returning `body`.
    pub fn create_token_endpoint(&mut self, body: Value, expected_requests: usize) -> Mock {
        self.setup
            .server
            .mock("POST", "/login/oauth/access_token")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Mock `GET /user` returning `body`.
    pub fn create_user_endpoint(&mut self, body: Value, expected_requests: usize) -> Mock {
        self.setup
            .server
            .mock("GET", "/user")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Mock `GET /user/emails` returning `body`.
    pub fn create_emails_endpoint(&mut self, body: Value, expected_requests: usize) -> Mock {
        self.setup
            .server
            .mock("GET", "/user/emails")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }
}
