//! Terminal UI support
//!
//! - `theme` - Color, icon and glyph tokens
//! - `terminal` - Terminal capability detection
//! - `context` - Effective color/unicode settings
//! - `json` - NDJSON event output
//! - `error` - Error presentation

pub mod context;
pub mod error;
pub mod json;
pub mod terminal;
pub mod theme;
