//! Utilities for controller request handling.
//!
//! This module provides the extractor that parses and validates server action inputs.

pub mod input;
