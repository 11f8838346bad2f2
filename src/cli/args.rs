//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueHint};

use crate::config::OutputFormat;

/// Vertical-order traversal of binary trees
#[derive(Parser, Debug)]
#[command(name = "vtree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub debug: u8,

    /// Directory holding a local .vtree.toml (default: cwd)
    #[arg(
        short = 'C',
        long,
        global = true,
        env = "VTREE_PROJECT_DIR",
        value_hint = ValueHint::DirPath
    )]
    pub project_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Where the tree definitions come from.
#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct TreeSource {
    /// File with one level-order tree per line
    #[arg(value_hint = ValueHint::FilePath)]
    pub file: Option<PathBuf>,

    /// Inline level-order tree, e.g. "1 2 3 null 4"
    #[arg(short, long)]
    pub tree: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the vertical order of each tree
    Traverse {
        #[command(flatten)]
        source: TreeSource,

        /// Output layout (overrides config)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Render each tree with column annotations
    Show {
        #[command(flatten)]
        source: TreeSource,
    },

    /// Build a binary search tree by insertion and print its vertical order
    Bst {
        /// Values inserted in the given order
        #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
        values: Vec<i64>,

        /// Output layout (overrides config)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective configuration
    Show,
    /// Show config file locations
    Path,
    /// Print a commented config template
    Template,
}
