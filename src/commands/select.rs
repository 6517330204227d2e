use std::path::PathBuf;

use anyhow::{Context, Result};
use crossterm::style::Stylize;

use paramtree::config::Config;
use paramtree::dialog::{run_interactive, DialogOptions, ParameterDialog, NO_SELECTION};
use paramtree::selection::Closed;
use paramtree::ui::context::UiContext;
use paramtree::ui::json::emit_event;
use paramtree::ui::json::events::{CloseEvent, StartEvent};
use paramtree::ui::theme::{colors, icons, icons_ascii, pick};
use paramtree::TreeGlyphs;

const COMMAND: &str = "select";

#[derive(Debug, Clone)]
pub struct SelectArgs {
    pub file: PathBuf,
    pub picks: Vec<String>,
    pub cancel: bool,
    pub fail_on_cancel: bool,
    pub expand_all: bool,
}

pub fn cmd_select(args: &SelectArgs, ui: &UiContext, config: &Config) -> Result<()> {
    if ui.json {
        emit_event(&StartEvent::new(COMMAND))?;
    }

    let model = paramtree::load_model(&args.file)
        .with_context(|| format!("failed to load {}", args.file.display()))?;

    let options = DialogOptions {
        title: config.dialog.title.clone(),
        unicode: ui.unicode,
        color: ui.color,
        expand_all: args.expand_all || config.dialog.expand_all,
        show_terminal_values: config.dialog.show_terminal_values,
    };
    let mut dialog = ParameterDialog::new(model, options);
    dialog.on_check_state_changed(|event| {
        if event.is_explicit() {
            tracing::info!(item = event.item.index(), checked = event.checked, "check state changed");
        }
    });

    let interactive = args.picks.is_empty() && !args.cancel && !ui.json && ui.caps.is_interactive();
    let closed = if interactive {
        run_interactive(dialog)?
    } else {
        for label in &args.picks {
            dialog.check(label)?;
        }
        dialog.close(!args.cancel)
    };

    if ui.json {
        emit_event(&CloseEvent::new(COMMAND, &closed))?;
    } else {
        print!("{}", format_closed(&closed, ui.unicode, ui.color));
    }

    if !closed.accepted && args.fail_on_cancel {
        std::process::exit(1);
    }
    Ok(())
}

/// Text summary of a closed dialog: outcome, display tree, values
pub fn format_closed(closed: &Closed, unicode: bool, color: bool) -> String {
    let status = if closed.accepted {
        let line = format!("{} Accepted", pick(unicode, icons::SUCCESS, icons_ascii::SUCCESS));
        if color {
            line.with(colors::SUCCESS).to_string()
        } else {
            line
        }
    } else {
        let line = format!("{} Cancelled", pick(unicode, icons::WARNING, icons_ascii::WARNING));
        if color {
            line.with(colors::WARNING).to_string()
        } else {
            line
        }
    };

    let values = if closed.terminal_values.is_empty() {
        NO_SELECTION.to_string()
    } else {
        closed.terminal_values.join(", ")
    };

    format!(
        "{}\n\n{}\n\nValues: {}\n",
        status,
        closed.display_tree.render(&TreeGlyphs::for_unicode(unicode)),
        values
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use paramtree::{ParameterDefinition, ParameterTreeModel};

    fn closed_with(picks: &[&str], accepted: bool) -> Closed {
        let model = ParameterTreeModel::build([
            ParameterDefinition::with_values("Quality", ["High", "Low"]),
            ParameterDefinition::with_values("MajorLocation", ["Head", "Chest"]),
        ])
        .unwrap();
        let mut dialog = ParameterDialog::new(model, DialogOptions::default());
        for label in picks {
            dialog.check(label).unwrap();
        }
        dialog.close(accepted)
    }

    #[test]
    fn format_closed_accepted_ascii() {
        let text = format_closed(&closed_with(&["High", "Chest"], true), false, false);
        assert_eq!(
            text,
            "[OK] Accepted\n\nSelected Parameters\n|-- Quality\n|   `-- High\n`-- MajorLocation\n    `-- Chest\n\nValues: High, Chest\n"
        );
    }

    #[test]
    fn format_closed_cancelled_empty() {
        let text = format_closed(&closed_with(&[], false), true, false);
        assert!(text.starts_with("⚠ Cancelled"));
        assert!(text.ends_with("Values: No parameters selected\n"));
    }
}
