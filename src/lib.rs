//! paramtree - hierarchical parameter selection with exclusive choice groups
//!
//! A parameter model (categories, sub-categories, values) is shown as a
//! checkable tree where sibling values exclude each other. A live display
//! tree mirrors the chosen path per category, and the chosen leaf values are
//! flattened into the terminal-value list.

pub mod config;
pub mod dialog;
pub mod error;
pub mod model;
pub mod parser;
pub mod presentation;
pub mod selection;
pub mod text_tree;
pub mod ui;

// Re-exports for convenience
pub use config::Config;
pub use dialog::{DialogAction, DialogOptions, DialogOutcome, ParameterDialog};
pub use error::{ParamError, ParamResult};
pub use model::{ParameterDefinition, ParameterNode, ParameterTreeModel};
pub use parser::{load_definitions, load_model, parse_definitions, DefinitionFormat};
pub use selection::{
    propagate_check, CheckableTree, ChoiceGroups, ChoiceTree, Closed, ItemId, SelectionTreeBuilder,
    ToggleEvent, ToggleOrigin,
};
pub use text_tree::TreeGlyphs;
