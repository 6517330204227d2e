//! CLI Argument Parsing
//!
//! Global flags (--json, --color, --ascii, --config, --verbose) are inherited
//! by all subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// paramtree - pick one value per parameter category from a tree
#[derive(Parser, Debug)]
#[command(name = "paramtree")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit NDJSON events instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Use ASCII glyphs instead of unicode
    #[arg(long, global = true)]
    pub ascii: bool,

    /// Configuration file (default: <config_dir>/paramtree/config.toml)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Choose parameter values, interactively or with --pick
    Select {
        /// Parameter definition file (.toml, .yaml, .yml, .json)
        file: PathBuf,

        /// Check a value by label or path (e.g. "High" or "Quality/High"); repeatable
        #[arg(long = "pick", value_name = "LABEL")]
        picks: Vec<String>,

        /// Close the dialog as cancelled instead of accepted
        #[arg(long)]
        cancel: bool,

        /// Exit with status 1 when the dialog is cancelled
        #[arg(long)]
        fail_on_cancel: bool,

        /// Open with every category expanded
        #[arg(long)]
        expand_all: bool,
    },

    /// Render the parameter tree of a definition file
    Show {
        /// Parameter definition file
        file: PathBuf,
    },

    /// List the exclusive choice groups of a definition file
    Groups {
        /// Parameter definition file
        file: PathBuf,
    },
}
