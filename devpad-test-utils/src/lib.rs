//! Shared test setup for devpad.
//!
//! Tests build a [`TestContext`] through [`TestBuilder`]: an in-memory SQLite database with
//! the requested tables, an in-memory session, and a mock HTTP server standing in for the
//! GitHub OAuth and REST endpoints.

pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        constant::*,
        fixtures::{github::factory as github_factory, user::factory as user_factory},
        TestBuilder, TestContext, TestError,
    };
}
