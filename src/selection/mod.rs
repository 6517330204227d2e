//! Parameter selection core
//!
//! Keeps a checkable tree of every possible value and a display tree of the
//! current choices in sync.
//!
//! # Module Structure
//!
//! - `checkable` - CheckableTree arena, check and expansion state
//! - `group` - ChoiceGroup: sibling leaves with at most one checked member
//! - `builder` - Construction of tree and groups from the parameter model
//! - `propagate` - Exclusivity enforcement and check-state notifications
//! - `display` - DisplayTree arena and rendering
//! - `choice_tree` - Selection state machine driving the display tree

mod builder;
mod checkable;
mod choice_tree;
mod display;
mod group;
mod propagate;

pub use builder::SelectionTreeBuilder;
pub use checkable::{CheckableItem, CheckableTree, ItemId, ItemKind, SelectionState, VisibleItem};
pub use choice_tree::{CategoryState, ChoiceTree, Closed};
pub use display::{DisplayNodeId, DisplaySnapshot, DisplayTree};
pub use group::{ChoiceGroup, ChoiceGroups, GroupId};
pub use propagate::{propagate_check, ToggleEvent, ToggleOrigin};
