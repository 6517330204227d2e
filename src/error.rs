//! Error types for paramtree
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for paramtree operations
pub type ParamResult<T> = Result<T, ParamError>;

/// Main error type for paramtree operations
#[derive(Error, Debug)]
pub enum ParamError {
    /// Two sibling categories share a name, or a category uses a reserved name
    #[error("name conflict: '{name}' is already defined under '{parent}'")]
    NameConflict { name: String, parent: String },

    /// A definition that cannot be turned into a parameter node
    #[error("invalid parameter definition: {message}")]
    InvalidDefinition { message: String },

    /// A toggle referenced a category with no display node.
    ///
    /// Unreachable unless the selection tree was built inconsistently.
    #[error("internal error: no display node for category '{category}'")]
    LookupFailure { category: String },

    /// A toggle named a choice group that does not exist or does not hold
    /// the toggled item.
    #[error("internal error: item {item} is not in choice group {group}")]
    GroupLookupFailure { group: usize, item: usize },

    /// A scripted pick named something that is not a selectable value
    #[error("unknown parameter value '{label}'")]
    UnknownItem { label: String },

    /// Definition file with an extension we cannot read
    #[error("unsupported definition format: {path} (expected .toml, .yaml, .yml or .json)")]
    UnsupportedFormat { path: PathBuf },

    /// Configuration file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ParamError {
    /// Short machine-readable code used in JSON error events
    pub fn code(&self) -> &'static str {
        match self {
            ParamError::NameConflict { .. } => "name_conflict",
            ParamError::InvalidDefinition { .. } => "invalid_definition",
            ParamError::LookupFailure { .. } | ParamError::GroupLookupFailure { .. } => {
                "lookup_failure"
            }
            ParamError::UnknownItem { .. } => "unknown_item",
            ParamError::UnsupportedFormat { .. } => "unsupported_format",
            ParamError::InvalidConfig { .. } => "invalid_config",
            ParamError::Io(_) => "io",
            ParamError::Toml(_) | ParamError::Yaml(_) | ParamError::Json(_) => "parse",
        }
    }
}
