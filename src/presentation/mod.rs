//! Presentation Layer
//!
//! CLI argument parsing (via clap). Commands live in the binary; this layer
//! only describes the command line so it can be tested in isolation.

pub mod cli;

pub use cli::{Cli, ColorWhen, Commands};
