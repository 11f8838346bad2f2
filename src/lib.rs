//! Vertical-order traversal of binary trees.
//!
//! Layers, innermost first:
//! - [`domain`]: tree model, construction and the column traversal
//! - [`application`]: loading tree definitions and producing reports
//! - [`infrastructure`]: filesystem seam and service wiring
//! - [`cli`]: argument parsing and command dispatch

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;

pub use domain::{vertical_columns, vertical_order, BinaryTree, BinaryTreeNode, Column};
