//! Terminal rendering for the parameter dialog.
//!
//! The dialog is drawn as up to three side-by-side panes: the checkable
//! tree, the selected-parameters tree, and the terminal values.

use crossterm::style::Stylize;
use unicode_width::UnicodeWidthStr;

use crate::selection::{SelectionState, VisibleItem};
use crate::ui::theme::{borders, borders_ascii, colors, icons, icons_ascii, pick};

use super::menu::ParameterDialog;

/// Placeholder shown in the terminal pane when nothing is selected
pub const NO_SELECTION: &str = "No parameters selected";

const TREE_PANE_TITLE: &str = "Parameters";
const DISPLAY_PANE_TITLE: &str = "Selection";
const TERMINAL_PANE_TITLE: &str = "Values";

/// Render a single checkable row
pub fn render_tree_row(row: &VisibleItem, is_active: bool, supports_unicode: bool) -> String {
    let indent = "  ".repeat(row.depth);
    let cursor = if is_active {
        format!("{} ", pick(supports_unicode, icons::CURSOR, icons_ascii::CURSOR))
    } else {
        String::from("  ")
    };

    // Leaves carry a checkbox; branches show the partial mark once something
    // below them is checked
    let state_icon = match row.state {
        SelectionState::Selected => pick(supports_unicode, icons::SELECTED, icons_ascii::SELECTED),
        SelectionState::Unselected => {
            pick(supports_unicode, icons::UNSELECTED, icons_ascii::UNSELECTED)
        }
        SelectionState::Partial => pick(supports_unicode, icons::PARTIAL, icons_ascii::PARTIAL),
    };

    let expand_icon = if row.has_children {
        let icon = if row.expanded {
            pick(supports_unicode, icons::EXPAND, icons_ascii::EXPAND)
        } else {
            pick(supports_unicode, icons::COLLAPSE, icons_ascii::COLLAPSE)
        };
        format!("{} ", icon)
    } else {
        String::new()
    };

    if row.checkable {
        format!("{}{}{} {}", cursor, indent, state_icon, row.label)
    } else if row.state == SelectionState::Partial {
        format!("{}{}{}{} {}", cursor, indent, expand_icon, state_icon, row.label)
    } else {
        format!("{}{}{}{}", cursor, indent, expand_icon, row.label)
    }
}

/// Lines of the checkable tree pane
pub fn render_tree_pane(rows: &[VisibleItem], cursor: usize, supports_unicode: bool) -> Vec<String> {
    rows.iter()
        .enumerate()
        .map(|(i, row)| render_tree_row(row, i == cursor, supports_unicode))
        .collect()
}

/// Lines of the terminal-values pane
pub fn render_terminal_pane(values: &[String]) -> Vec<String> {
    if values.is_empty() {
        vec![NO_SELECTION.to_string()]
    } else {
        values.to_vec()
    }
}

fn pad_to(line: &str, width: usize) -> String {
    let fill = width.saturating_sub(line.width());
    format!("{}{}", line, " ".repeat(fill))
}

/// Lay out titled panes next to each other, padding by display width
pub fn join_panes(panes: &[(&str, Vec<String>)], supports_unicode: bool) -> String {
    let vertical = pick(supports_unicode, borders::VERTICAL, borders_ascii::VERTICAL);
    let horizontal = pick(supports_unicode, borders::HORIZONTAL, borders_ascii::HORIZONTAL);

    let widths: Vec<usize> = panes
        .iter()
        .map(|(title, lines)| {
            lines
                .iter()
                .map(|l| l.width())
                .chain(std::iter::once(title.width()))
                .max()
                .unwrap_or(0)
        })
        .collect();
    let height = panes.iter().map(|(_, lines)| lines.len()).max().unwrap_or(0);
    let separator = format!(" {} ", vertical);

    let mut out = Vec::with_capacity(height + 2);
    out.push(
        panes
            .iter()
            .zip(&widths)
            .map(|((title, _), &w)| pad_to(title, w))
            .collect::<Vec<_>>()
            .join(&separator)
            .trim_end()
            .to_string(),
    );
    out.push(
        widths
            .iter()
            .map(|&w| horizontal.repeat(w))
            .collect::<Vec<_>>()
            .join(&format!("{}{}{}", horizontal, vertical, horizontal)),
    );
    for row in 0..height {
        let line = panes
            .iter()
            .zip(&widths)
            .map(|((_, lines), &w)| pad_to(lines.get(row).map(String::as_str).unwrap_or(""), w))
            .collect::<Vec<_>>()
            .join(&separator);
        out.push(line.trim_end().to_string());
    }
    out.join("\n")
}

/// Render the full dialog body
pub fn render_dialog(dialog: &ParameterDialog) -> String {
    let options = dialog.options();
    let unicode = options.unicode;

    let tree_lines = render_tree_pane(dialog.visible_items(), dialog.cursor_position(), unicode);

    let display_lines: Vec<String> = dialog
        .choices()
        .rendered()
        .lines()
        .map(str::to_string)
        .collect();

    let mut panes = vec![
        (TREE_PANE_TITLE, tree_lines),
        (DISPLAY_PANE_TITLE, display_lines),
    ];
    if options.show_terminal_values {
        panes.push((
            TERMINAL_PANE_TITLE,
            render_terminal_pane(dialog.choices().terminal_values()),
        ));
    }

    let body = join_panes(&panes, unicode);
    if !options.color {
        return body;
    }

    // Highlight after layout so escape codes do not skew pane widths
    let active_row = dialog.cursor_position() + 2;
    body.lines()
        .enumerate()
        .map(|(i, line)| {
            if i == active_row {
                line.with(colors::INFO).to_string()
            } else {
                line.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render the status bar showing how many categories have a choice
pub fn render_status_bar(selected: usize, total: usize, supports_unicode: bool) -> String {
    let selected_icon = pick(supports_unicode, icons::SELECTED, icons_ascii::SELECTED);
    let partial_icon = pick(supports_unicode, icons::PARTIAL, icons_ascii::PARTIAL);
    let unselected_icon = pick(supports_unicode, icons::UNSELECTED, icons_ascii::UNSELECTED);

    format!(
        "Selected: {}/{} categories\n\n{} = selected    {} = partial    {} = not selected",
        selected, total, selected_icon, partial_icon, unselected_icon
    )
}

/// Render the help bar showing keyboard shortcuts
pub fn render_help_bar(supports_unicode: bool) -> String {
    let navigate = pick(supports_unicode, "↑↓", "Up/Down");
    let expand = pick(supports_unicode, "→←", "Right/Left");
    format!(
        "[Space] Check    [Tab] Inspect    [e] Expand all    [Enter] OK    [Esc] Cancel\n\
         (Use {} to navigate, {} to expand/collapse)",
        navigate, expand
    )
}
