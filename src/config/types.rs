//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ParamResult;

use super::loader::{self, ConfigWarning};

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Parse the value of an environment override
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "auto" => Some(Self::Auto),
            "always" | "on" | "true" | "1" => Some(Self::Always),
            "never" | "off" | "false" | "0" => Some(Self::Never),
            _ => None,
        }
    }
}

/// Terminal output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    /// Use unicode glyphs when the terminal supports them
    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
            unicode: true,
        }
    }
}

/// Parameter dialog configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogConfig {
    #[serde(default = "default_title")]
    pub title: String,

    /// Open with every category expanded
    #[serde(default)]
    pub expand_all: bool,

    /// Show the flat list of chosen values next to the trees
    #[serde(default = "default_true")]
    pub show_terminal_values: bool,
}

impl Default for DialogConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            expand_all: false,
            show_terminal_values: true,
        }
    }
}

fn default_title() -> String {
    "Select Parameters".to_string()
}

fn default_true() -> bool {
    true
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub dialog: DialogConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> ParamResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> ParamResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from an explicit file, the user config, or defaults, then apply
    /// environment overrides
    pub fn load_layered(explicit: Option<&Path>) -> ParamResult<(Self, Vec<ConfigWarning>)> {
        loader::load_layered(explicit)
    }

    /// Apply environment variable overrides (PARAMTREE_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self, |key| std::env::var(key).ok())
    }
}
