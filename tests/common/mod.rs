#![allow(dead_code)]

//! Common test utilities for revtag CLI and scenario tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated build root with a temp directory
//! - Fixtures: Reusable build output constants

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
