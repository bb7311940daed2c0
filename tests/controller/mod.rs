//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with their extractors, the way the router would, and the
//! returned responses inspected.

mod action;
mod callback;

use devpad_test_utils::prelude::*;

use crate::util::TestContextExt;
