//! Owned binary tree used as traversal input.

use std::collections::VecDeque;
use std::fmt;

use tracing::instrument;

use crate::domain::traversal::{self, Column};

/// Binary tree node with exclusively-owned children.
///
/// Every node has exactly one owner (its parent slot, or the caller for the
/// root), so the structure is a finite out-tree and cannot contain cycles.
///
/// `Drop` is iterative. The derived `Clone`, `PartialEq` and `Debug` recurse
/// per level and are meant for trees of moderate depth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryTreeNode {
    pub value: i64,
    pub left: Option<Box<BinaryTreeNode>>,
    pub right: Option<Box<BinaryTreeNode>>,
}

impl BinaryTreeNode {
    pub fn new(
        value: i64,
        left: Option<BinaryTreeNode>,
        right: Option<BinaryTreeNode>,
    ) -> Self {
        Self {
            value,
            left: left.map(Box::new),
            right: right.map(Box::new),
        }
    }

    pub fn leaf(value: i64) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    pub fn with_left(mut self, child: BinaryTreeNode) -> Self {
        self.left = Some(Box::new(child));
        self
    }

    pub fn with_right(mut self, child: BinaryTreeNode) -> Self {
        self.right = Some(Box::new(child));
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

impl fmt::Display for BinaryTreeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Detaches both children so nested boxes are released one level at a time.
impl Drop for BinaryTreeNode {
    fn drop(&mut self) {
        let mut pending: Vec<Box<BinaryTreeNode>> = Vec::new();
        pending.extend(self.left.take());
        pending.extend(self.right.take());
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

/// Binary tree owning an optional root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BinaryTree {
    root: Option<Box<BinaryTreeNode>>,
}

impl From<BinaryTreeNode> for BinaryTree {
    fn from(root: BinaryTreeNode) -> Self {
        Self {
            root: Some(Box::new(root)),
        }
    }
}

impl From<Option<BinaryTreeNode>> for BinaryTree {
    fn from(root: Option<BinaryTreeNode>) -> Self {
        Self {
            root: root.map(Box::new),
        }
    }
}

impl BinaryTree {
    pub fn new() -> Self {
        Self { root: None }
    }

    pub fn root(&self) -> Option<&BinaryTreeNode> {
        self.root.as_deref()
    }

    pub(crate) fn root_slot(&mut self) -> &mut Option<Box<BinaryTreeNode>> {
        &mut self.root
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of nodes in the tree.
    #[instrument(level = "trace", skip(self))]
    pub fn len(&self) -> usize {
        self.level_order_nodes().len()
    }

    /// Number of levels, 0 for an empty tree.
    #[instrument(level = "trace", skip(self))]
    pub fn depth(&self) -> usize {
        let mut max_depth = 0;
        let mut queue = VecDeque::new();
        if let Some(root) = self.root() {
            queue.push_back((root, 1));
        }

        while let Some((node, depth)) = queue.pop_front() {
            max_depth = max_depth.max(depth);
            for child in [node.left.as_deref(), node.right.as_deref()]
                .into_iter()
                .flatten()
            {
                queue.push_back((child, depth + 1));
            }
        }

        max_depth
    }

    /// Values in breadth-first order, left to right within a level.
    pub fn values_level_order(&self) -> Vec<i64> {
        self.level_order_nodes()
            .into_iter()
            .map(|node| node.value)
            .collect()
    }

    pub fn vertical_order(&self) -> Vec<i64> {
        traversal::vertical_order(self.root())
    }

    pub fn vertical_columns(&self) -> Vec<Column> {
        traversal::vertical_columns(self.root())
    }

    fn level_order_nodes(&self) -> Vec<&BinaryTreeNode> {
        let mut nodes = Vec::new();
        let mut queue = VecDeque::new();
        queue.extend(self.root());

        while let Some(node) = queue.pop_front() {
            nodes.push(node);
            queue.extend(node.left.as_deref());
            queue.extend(node.right.as_deref());
        }

        nodes
    }
}
