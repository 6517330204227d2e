//! Shared JSON event types for consistent CLI output.

use serde::Serialize;

use crate::selection::{Closed, DisplaySnapshot};

/// Event emitted when a command starts.
#[derive(Debug, Clone, Serialize)]
pub struct StartEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub version: &'static str,
}

impl<'a> StartEvent<'a> {
    pub fn new(command: &'a str) -> Self {
        Self {
            event: "start",
            command,
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// One `(category, value)` pair of a close event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionEntry {
    pub category: String,
    pub value: String,
}

/// Event emitted when the parameter dialog closes.
#[derive(Debug, Clone, Serialize)]
pub struct CloseEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub accepted: bool,
    pub terminal_values: Vec<String>,
    pub selections: Vec<SelectionEntry>,
    pub display_tree: DisplaySnapshot,
}

impl<'a> CloseEvent<'a> {
    pub fn new(command: &'a str, closed: &Closed) -> Self {
        let tree = &closed.display_tree;
        let selections = tree
            .children(tree.root())
            .iter()
            .filter_map(|&category| {
                let leaf = *tree.leaves_below(category).first()?;
                Some(SelectionEntry {
                    category: tree.name(category).to_string(),
                    value: tree.name(leaf).to_string(),
                })
            })
            .collect();

        Self {
            event: "close",
            command,
            accepted: closed.accepted,
            terminal_values: closed.terminal_values.clone(),
            selections,
            display_tree: tree.snapshot(),
        }
    }
}

/// Event emitted when an error occurs.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub code: &'a str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
}

impl<'a> ErrorEvent<'a> {
    pub fn new(command: &'a str, code: &'a str, message: impl Into<String>) -> Self {
        Self {
            event: "error",
            command,
            code,
            message: message.into(),
            help: None,
        }
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

/// Wrapper for data events that includes command context.
#[derive(Debug, Clone, Serialize)]
pub struct DataEvent<'a, T: Serialize> {
    pub event: &'static str,
    pub command: &'a str,
    #[serde(flatten)]
    pub data: T,
}

impl<'a, T: Serialize> DataEvent<'a, T> {
    pub fn new(command: &'a str, data: T) -> Self {
        Self {
            event: "data",
            command,
            data,
        }
    }
}
