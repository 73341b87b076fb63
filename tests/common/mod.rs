//! Common test utilities for doxycheck CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated project directory with a fake `doxygen`
//! - Fixtures: Reusable headers and warning lines

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
