//! Business logic services.
//!
//! Services coordinate repositories and external APIs: the auth service drives the GitHub
//! sign-in flow and the message service backs the test message action.

pub mod auth;
pub mod message;
