//! Configuration module for paramtree
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (PARAMTREE_*)
//! 3. `--config` file
//! 4. User config (`<config_dir>/paramtree/config.toml`)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{user_config_path, with_env_overrides, ConfigWarning};
pub use types::{ColorMode, Config, DialogConfig, OutputConfig};
