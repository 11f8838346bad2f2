//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Errors raised while constructing a tree.
///
/// Traversal itself cannot fail: an owned tree is always finite and acyclic.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("invalid token at position {position}: {token:?}")]
    InvalidToken { position: usize, token: String },

    #[error("unbalanced brackets in {0:?}")]
    UnbalancedBrackets(String),

    #[error("{count} value(s) have no parent slot after {consumed} slot(s)")]
    DanglingValues { count: usize, consumed: usize },

    #[error("internal tree operation failed: {0}")]
    Internal(String),
}
