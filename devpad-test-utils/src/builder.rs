//! Declarative test builder.
//!
//! Configuration methods queue tables, fixtures and mock endpoints; everything is created
//! when `build()` is awaited.

use mockito::Mock;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};
use serde_json::Value;

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_auth_tables: bool,

    // Database fixtures to insert
    // emails
    users: Vec<String>,
    // (email, github_id)
    users_with_github_account: Vec<(String, i64)>,

    // Mock endpoints to create
    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,
    token_endpoints: Vec<(Value, usize)>,
    user_endpoints: Vec<(Value, usize)>,
    emails_endpoints: Vec<(Value, usize)>,
}

impl TestBuilder {
    /// Create a new TestBuilder with nothing configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_auth_tables: false,
            users: Vec::new(),
            users_with_github_account: Vec::new(),
            mock_builders: Vec::new(),
            token_endpoints: Vec::new(),
            user_endpoints: Vec::new(),
            emails_endpoints: Vec::new(),
        }
    }

    /// Add the user, account, session and verification tables.
    pub fn with_auth_tables(mut self) -> Self {
        self.include_auth_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use devpad_test_utils::TestBuilder;
    ///
    /// # async fn example() -> Result<(), devpad_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(entity::prelude::User)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a user with the given email during `build()`.
    ///
    /// Requires the user table, see [`Self::with_auth_tables`].
    pub fn with_user(mut self, email: impl Into<String>) -> Self {
        self.users.push(email.into());
        self
    }

    /// Insert a user linked to the GitHub account `github_id` during `build()`.
    pub fn with_github_user(mut self, email: impl Into<String>, github_id: i64) -> Self {
        self.users_with_github_account.push((email.into(), github_id));
        self
    }

    /// Mock `POST /login/oauth/access_token`, expected `expected_requests` times.
    pub fn with_token_endpoint(mut self, body: Value, expected_requests: usize) -> Self {
        self.token_endpoints.push((body, expected_requests));
        self
    }

    /// Mock `GET /user`, expected `expected_requests` times.
    pub fn with_user_endpoint(mut self, body: Value, expected_requests: usize) -> Self {
        self.user_endpoints.push((body, expected_requests));
        self
    }

    /// Mock `GET /user/emails`, expected `expected_requests` times.
    pub fn with_emails_endpoint(mut self, body: Value, expected_requests: usize) -> Self {
        self.emails_endpoints.push((body, expected_requests));
        self
    }

    /// Add a custom mock endpoint with full control over the mock server.
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Build the test context.
    ///
    /// Executes queued operations in order:
    /// 1. Creates database tables
    /// 2. Inserts database fixtures
    /// 3. Creates mock HTTP endpoints
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Configured test environment
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_auth_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::User),
                schema.create_table_from_entity(entity::prelude::Account),
                schema.create_table_from_entity(entity::prelude::Session),
                schema.create_table_from_entity(entity::prelude::Verification),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert database fixtures
        for email in self.users {
            setup.user().insert_user(&email).await?;
        }

        for (email, github_id) in self.users_with_github_account {
            setup
                .user()
                .insert_user_with_github_account(&email, github_id)
                .await?;
        }

        // 3. Create mock endpoints
        // Custom endpoints go first so tests can stack mocks for the same path
        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut setup.server));
        }

        for (body, expected) in self.token_endpoints {
            mocks.push(setup.github().create_token_endpoint(body, expected));
        }

        for (body, expected) in self.user_endpoints {
            mocks.push(setup.github().create_user_endpoint(body, expected));
        }

        for (body, expected) in self.emails_endpoints {
            mocks.push(setup.github().create_emails_endpoint(body, expected));
        }

        setup.mocks = mocks;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
