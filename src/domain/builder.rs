//! Tree construction from level-order notation and BST insertion.

use std::collections::VecDeque;

use tracing::{debug, instrument};

use crate::domain::error::DomainError;
use crate::domain::tree::{BinaryTree, BinaryTreeNode};

/// Result type for tree construction.
pub type TreeResult<T> = Result<T, DomainError>;

/// Which child slot of a queued parent is filled next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

/// Splits level-order notation into slots.
///
/// Accepts `1, 2, null, 3`, `1 2 null 3` and `[1,2,null,3]`. Brackets come
/// in pairs or not at all. The null token is matched case-insensitively.
pub fn parse_level_order(input: &str, null_token: &str) -> TreeResult<Vec<Option<i64>>> {
    let trimmed = input.trim();
    let body = match (trimmed.strip_prefix('['), trimmed.ends_with(']')) {
        (Some(rest), true) => rest.strip_suffix(']').unwrap_or(rest),
        (None, false) => trimmed,
        _ => return Err(DomainError::UnbalancedBrackets(trimmed.to_string())),
    };

    body.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(position, token)| {
            if token.eq_ignore_ascii_case(null_token) {
                Ok(None)
            } else {
                token
                    .parse::<i64>()
                    .map(Some)
                    .map_err(|_| DomainError::InvalidToken {
                        position,
                        token: token.to_string(),
                    })
            }
        })
        .collect()
}

impl BinaryTree {
    /// Builds a tree from compact level-order slots.
    ///
    /// Each present node consumes the next two slots as its children; absent
    /// nodes consume none. Trailing absent slots are ignored, any other
    /// leftover slot is an error.
    #[instrument(level = "debug", skip(slots), fields(slots = slots.len()))]
    pub fn from_level_order(slots: &[Option<i64>]) -> TreeResult<Self> {
        let mut slots = slots.iter().copied();
        let Some(Some(root_value)) = slots.next() else {
            debug!("no root slot, empty tree");
            return Ok(Self::new());
        };

        let mut nodes = vec![Some(BinaryTreeNode::leaf(root_value))];
        // (parent, side, child) as indices into `nodes`
        let mut links: Vec<(usize, Side, usize)> = Vec::new();
        let mut parents = VecDeque::from([0usize]);
        let mut side = Side::Left;
        let mut consumed = 1;

        while let Some(&parent) = parents.front() {
            let Some(slot) = slots.next() else { break };
            consumed += 1;

            if let Some(value) = slot {
                let child = nodes.len();
                nodes.push(Some(BinaryTreeNode::leaf(value)));
                links.push((parent, side, child));
                parents.push_back(child);
            }

            side = match side {
                Side::Left => Side::Right,
                Side::Right => {
                    parents.pop_front();
                    Side::Left
                }
            };
        }

        let dangling = slots.filter(Option::is_some).count();
        if dangling > 0 {
            return Err(DomainError::DanglingValues {
                count: dangling,
                consumed,
            });
        }

        // children always follow their parent, so attaching in reverse
        // completes every subtree before it is moved into its parent
        for (parent, side, child) in links.into_iter().rev() {
            let child = nodes[child]
                .take()
                .ok_or_else(|| DomainError::Internal(format!("node {child} attached twice")))?;
            let parent = nodes[parent]
                .as_mut()
                .ok_or_else(|| DomainError::Internal(format!("parent {parent} already moved")))?;
            match side {
                Side::Left => parent.left = Some(Box::new(child)),
                Side::Right => parent.right = Some(Box::new(child)),
            }
        }

        debug!(nodes = nodes.len(), "built tree from level order");
        Ok(Self::from(nodes.swap_remove(0)))
    }

    /// Builds a binary search tree by inserting values in order.
    pub fn from_bst_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = i64>,
    {
        let mut tree = Self::new();
        for value in values {
            tree.insert_bst(value);
        }
        tree
    }

    /// Inserts by BST order: smaller values go left, others go right.
    pub fn insert_bst(&mut self, value: i64) {
        let mut slot = self.root_slot();
        while let Some(node) = slot {
            slot = if value < node.value {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *slot = Some(Box::new(BinaryTreeNode::leaf(value)));
    }
}
