//! Vertical-order (column) traversal.
//!
//! Every node is assigned a column: the root sits in column 0, a left child
//! one column to the left of its parent and a right child one column to the
//! right. Values are emitted column by column from the leftmost, and within
//! a column in breadth-first discovery order.
//!
//! The bucket map is never iterated directly. Output is assembled by walking
//! the integer range `[min_column, max_column]`, which keeps the result
//! independent of map iteration order.

use std::collections::{HashMap, VecDeque};

use tracing::{debug, instrument, trace};

use crate::domain::tree::BinaryTreeNode;

/// Values that share one column, top to bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub index: i64,
    pub values: Vec<i64>,
}

/// Column buckets collected by one breadth-first pass over a tree.
#[derive(Debug, Default)]
pub struct ColumnTraversal {
    buckets: HashMap<i64, Vec<i64>>,
    bounds: Option<(i64, i64)>,
}

impl ColumnTraversal {
    /// Walks the tree once and fills the column buckets.
    ///
    /// An absent root produces an empty traversal.
    #[instrument(level = "debug", skip(root))]
    pub fn run(root: Option<&BinaryTreeNode>) -> Self {
        let Some(root) = root else {
            debug!("empty tree");
            return Self::default();
        };

        let mut frontier: VecDeque<(&BinaryTreeNode, i64)> = VecDeque::new();
        let mut buckets: HashMap<i64, Vec<i64>> = HashMap::new();
        let (mut min_column, mut max_column) = (0, 0);
        frontier.push_back((root, 0));

        while let Some((node, column)) = frontier.pop_front() {
            trace!(value = node.value, column, "visit");
            buckets.entry(column).or_default().push(node.value);
            min_column = min_column.min(column);
            max_column = max_column.max(column);

            if let Some(left) = node.left.as_deref() {
                frontier.push_back((left, column - 1));
            }
            if let Some(right) = node.right.as_deref() {
                frontier.push_back((right, column + 1));
            }
        }

        debug!(min_column, max_column, "traversal done");
        Self {
            buckets,
            bounds: Some((min_column, max_column)),
        }
    }

    /// Leftmost and rightmost column, `None` for an empty tree.
    pub fn bounds(&self) -> Option<(i64, i64)> {
        self.bounds
    }

    /// Number of columns spanned by the tree.
    pub fn width(&self) -> usize {
        self.bounds
            .map(|(min, max)| usize::try_from(max - min + 1).unwrap_or(0))
            .unwrap_or(0)
    }

    /// Values of one column, if the tree reaches it.
    pub fn column(&self, index: i64) -> Option<&[i64]> {
        self.buckets.get(&index).map(Vec::as_slice)
    }

    /// Flattens the buckets into the vertical order.
    pub fn into_order(self) -> Vec<i64> {
        let total = self.buckets.values().map(Vec::len).sum();
        let mut order = Vec::with_capacity(total);
        for column in self.into_columns() {
            order.extend(column.values);
        }
        order
    }

    /// Buckets as columns, leftmost first.
    pub fn into_columns(mut self) -> Vec<Column> {
        let Some((min, max)) = self.bounds else {
            return Vec::new();
        };

        // the column range is dense for a connected tree; a gap is skipped
        (min..=max)
            .filter_map(|index| {
                self.buckets
                    .remove(&index)
                    .map(|values| Column { index, values })
            })
            .collect()
    }
}

/// Values of the tree in vertical order.
///
/// Returns every node value exactly once. The tree is only borrowed.
pub fn vertical_order(root: Option<&BinaryTreeNode>) -> Vec<i64> {
    ColumnTraversal::run(root).into_order()
}

/// Values of the tree grouped by column, leftmost column first.
pub fn vertical_columns(root: Option<&BinaryTreeNode>) -> Vec<Column> {
    ColumnTraversal::run(root).into_columns()
}
