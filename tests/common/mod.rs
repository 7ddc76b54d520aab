//! Common test utilities for Archivist CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated project directory with git helpers
//! - Assertion macros: `assert_success!`, `assert_output_contains!`, etc.
//! - Fixtures: Reusable page and document content

#![allow(dead_code)]

pub mod assertions;
pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
