#![allow(dead_code)]
//! Shared test utilities for integration tests.
//!
//! # Modules
//!
//! - `fixtures`: regression transactions and keys with their recorded bytes
//! - `assertions`: assertion helpers with readable failure output

pub mod assertions;
pub mod fixtures;

pub use assertions::{assert_error_contains, assert_hex_eq};
pub use fixtures::*;
