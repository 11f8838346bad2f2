//! Domain layer: tree model, construction and column traversal
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod builder;
pub mod error;
pub mod traversal;
pub mod tree;
pub mod tree_traits;

pub use builder::{parse_level_order, TreeResult};
pub use error::DomainError;
pub use traversal::{vertical_columns, vertical_order, Column, ColumnTraversal};
pub use tree::{BinaryTree, BinaryTreeNode};
pub use tree_traits::{TreeNodeConvert, MAX_RENDER_DEPTH};
