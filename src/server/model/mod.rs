//! Server application models and type definitions.
//!
//! This module contains data models for the server application, including application state,
//! session data structures, the raw inputs accepted by server actions and the GitHub API
//! responses consumed by the sign-in flow.

pub mod action;
pub mod app;
pub mod auth;
pub mod github;
pub mod session;
