//! Data transfer objects shared between the server API and its clients.

pub mod action;
pub mod api;
