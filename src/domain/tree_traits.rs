use termtree::Tree;
use tracing::instrument;

use crate::domain::tree::{BinaryTree, BinaryTreeNode};

/// Label used for the missing sibling of a single child.
pub const ABSENT_LABEL: &str = "∅";

/// Deepest tree the CLI renders. Rendering and printing both recurse once
/// per level.
pub const MAX_RENDER_DEPTH: usize = 1_000;

/// Rendering as a `termtree`.
///
/// The conversion recurses once per level without a bound of its own; callers
/// handling untrusted input check [`BinaryTree::depth`] against
/// [`MAX_RENDER_DEPTH`] first.
pub trait TreeNodeConvert {
    fn to_tree_string(&self) -> Tree<String>;
}

impl TreeNodeConvert for BinaryTree {
    #[instrument(level = "debug", skip(self))]
    fn to_tree_string(&self) -> Tree<String> {
        match self.root() {
            Some(root) => build_tree(root, 0),
            None => Tree::new("(empty)".to_string()),
        }
    }
}

fn label(node: &BinaryTreeNode, column: i64) -> String {
    format!("{} (col {})", node.value, column)
}

// Leaves are listed left before right; a lone child keeps its side visible
// through an absent marker in the other position.
fn build_tree(node: &BinaryTreeNode, column: i64) -> Tree<String> {
    let mut tree = Tree::new(label(node, column));
    if node.is_leaf() {
        return tree;
    }

    match node.left.as_deref() {
        Some(left) => tree.push(build_tree(left, column - 1)),
        None => tree.push(Tree::new(ABSENT_LABEL.to_string())),
    };
    match node.right.as_deref() {
        Some(right) => tree.push(build_tree(right, column + 1)),
        None => tree.push(Tree::new(ABSENT_LABEL.to_string())),
    };
    tree
}
