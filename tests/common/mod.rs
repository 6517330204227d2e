//! Common test utilities for paramtree CLI tests.
//!
//! - `TestEnv`: isolated temp directory used as HOME and XDG config root
//! - Fixtures: reusable definition files

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
