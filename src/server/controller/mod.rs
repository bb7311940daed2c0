//! HTTP controller endpoints for the devpad web API.
//!
//! This module contains Axum handlers for the server actions invoked by the client and the
//! OAuth callback. Controllers extract and validate inputs, call into services, and return
//! redirects or structured responses. They integrate with tower-sessions for session
//! management and use utoipa for OpenAPI documentation.

pub mod action;
pub mod auth;
pub mod util;
