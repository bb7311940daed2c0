//! Data access layer repositories.
//!
//! This module contains all database repository implementations for the application.
//! Repositories provide an abstraction layer over database operations, organizing data
//! access by table: users, their linked provider accounts, sessions and the short-lived
//! verification values used during OAuth sign-in.

pub mod account;
pub mod session;
pub mod user;
pub mod verification;
