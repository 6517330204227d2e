//! Parameter selection dialog
//!
//! A modal terminal dialog with three panes: the checkable parameter tree,
//! the tree of current choices, and the flat list of chosen values.
//!
//! # Module Structure
//!
//! - `menu` - ParameterDialog state, actions and observers
//! - `render` - Pane layout and terminal rendering
//! - `input` - Keyboard input handling and interactive loop

mod input;
mod menu;
mod render;

pub use input::{key_to_action, run_interactive};
pub use menu::{DialogAction, DialogOptions, DialogOutcome, ParameterDialog};
pub use render::NO_SELECTION;
