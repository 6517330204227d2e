//! Command implementations
//!
//! - `select` - Run the parameter dialog, interactively or scripted
//! - `show` - Render the parameter model
//! - `groups` - List exclusive choice groups

pub mod groups;
pub mod select;
pub mod show;

pub use groups::cmd_groups;
pub use select::{cmd_select, SelectArgs};
pub use show::cmd_show;
