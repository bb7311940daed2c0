//! Fixtures for database records and mock GitHub endpoints.
//!
//! - `github` - GitHub OAuth token and REST API endpoints
//! - `user` - user and linked account records

pub mod github;
pub mod user;
