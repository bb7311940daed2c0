//! Test context returned by [`TestBuilder`](crate::TestBuilder).

use std::sync::Arc;

use mockito::{Mock, Server, ServerGuard};
use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use tower_sessions::{MemoryStore, Session};

use crate::error::TestError;

/// Test environment with a database, a session and a mock GitHub server.
///
/// ```ignore
/// let test = TestBuilder::new().with_auth_tables().build().await?;
///
/// let auth = AuthService::builder()
///     .base_url(TEST_BASE_URL)
///     .github(TEST_GITHUB_CLIENT_ID, TEST_GITHUB_CLIENT_SECRET)
///     .github_endpoints(&test.server_url())
///     .build(test.db.clone())?;
///
/// test.assert_mocks();
/// ```
pub struct TestContext {
    /// Connection to an in-memory SQLite database
    pub db: DatabaseConnection,
    /// Session backed by an in-memory store
    pub session: Session,

    /// Mock HTTP server for GitHub endpoints
    pub(crate) server: ServerGuard,
    /// Mock endpoints kept alive for assertion
    pub(crate) mocks: Vec<Mock>,
}

impl TestContext {
    pub(crate) async fn new() -> Result<Self, TestError> {
        let server = Server::new_async().await;

        let store = Arc::new(MemoryStore::default());
        let session = Session::new(None, store, None);

        let db = Database::connect("sqlite::memory:").await?;

        Ok(Self {
            db,
            session,
            server,
            mocks: Vec::new(),
        })
    }

    /// URL of the mock server, used as the GitHub web and API base URL.
    pub fn server_url(&self) -> String {
        self.server.url()
    }

    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Assert all mock endpoints were called the expected number of times.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called as expected
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}
