//! JSON output utilities for CLI commands.
//!
//! - Shared event types for consistent NDJSON output (`events`)
//! - Helper functions for emitting events, one JSON object per line

pub mod events;

use serde::Serialize;
use std::io::{self, Write};

/// Write a single NDJSON event (one JSON object per line).
pub fn write_event(out: &mut impl Write, event: &serde_json::Value) -> io::Result<()> {
    let line = serde_json::to_string(event).unwrap_or_else(|_| "{}".to_string());
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

/// Write a typed event.
pub fn write_typed(out: &mut impl Write, event: &impl Serialize) -> io::Result<()> {
    let value = serde_json::to_value(event).unwrap_or_else(|_| serde_json::json!({}));
    write_event(out, &value)
}

/// Convenience helper that writes a typed event to stdout.
pub fn emit_event(event: &impl Serialize) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_typed(&mut out, event)
}
