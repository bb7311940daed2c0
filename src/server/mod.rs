//! Server application core modules.
//!
//! This module contains all server-side functionality: environment configuration, the
//! GitHub sign-in flow, database-backed sessions, the route guard protecting the dashboard,
//! and the server actions invoked by the client.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod session;
pub mod startup;
pub mod validation;

