//! Common test utilities for solbundle CLI tests.
//!
//! This module provides:
//! - `TestEnv`: isolated project directory plus a runner for the binary
//! - Fixtures: reusable config and address constants

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
