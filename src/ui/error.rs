//! Error presentation for the CLI

use crossterm::style::Stylize;

use crate::error::ParamError;
use crate::ui::context::UiContext;
use crate::ui::json::events::ErrorEvent;
use crate::ui::theme::{colors, icons, icons_ascii, pick};

/// Fix hint for errors a user can act on
pub fn error_help(err: &ParamError) -> Option<String> {
    match err {
        ParamError::NameConflict { name, .. } => Some(format!(
            "Rename one of the '{}' entries; sibling names must be unique",
            name
        )),
        ParamError::InvalidDefinition { .. } => {
            Some("Every category and value needs a non-empty name".to_string())
        }
        ParamError::UnknownItem { .. } => {
            Some("Run 'paramtree show <FILE>' to list the selectable values".to_string())
        }
        ParamError::UnsupportedFormat { .. } => {
            Some("Use a .toml, .yaml, .yml or .json definition file".to_string())
        }
        _ => None,
    }
}

fn error_code(err: &anyhow::Error) -> &'static str {
    err.downcast_ref::<ParamError>()
        .map(ParamError::code)
        .unwrap_or("error")
}

/// Plain-text rendering of an error with an optional fix hint
pub fn format_error(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    let icon = pick(supports_unicode, icons::ERROR, icons_ascii::ERROR);
    let head = format!("{} {:#}", icon, err);
    let mut out = if supports_color {
        head.with(colors::ERROR).to_string()
    } else {
        head
    };
    out.push('\n');

    if let Some(help) = err.downcast_ref::<ParamError>().and_then(error_help) {
        out.push_str(&format!("  help: {}\n", help));
    }
    out
}

/// Print an error to stderr, or as an NDJSON `error` event on stdout, using
/// the resolved output settings
pub fn print_error(err: &anyhow::Error, command: &str, ui: &UiContext) {
    if ui.json {
        let mut event = ErrorEvent::new(command, error_code(err), format!("{:#}", err));
        if let Some(help) = err.downcast_ref::<ParamError>().and_then(error_help) {
            event = event.with_help(help);
        }
        let _ = crate::ui::json::emit_event(&event);
        return;
    }

    eprint!("{}", format_error(err, ui.color, ui.unicode));
}
