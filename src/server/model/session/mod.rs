//! Session data models.
//!
//! Type-safe wrappers for values stored in the tower-sessions session, each with methods for
//! inserting and retrieving it.

pub mod user;
