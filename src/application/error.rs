//! Application-level errors (wraps domain errors)

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::DomainError;

/// Application errors carry domain errors with application-level context.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("tree file not found: {0}")]
    InputNotFound(PathBuf),

    #[error("line {line}: {source}")]
    InvalidDefinition {
        line: usize,
        #[source]
        source: DomainError,
    },

    #[error("line {line}: tree depth {depth} exceeds render limit {limit}")]
    TooDeepToRender {
        line: usize,
        depth: usize,
        limit: usize,
    },

    #[error("config error: {message}")]
    Config { message: String },

    #[error("operation failed: {context}")]
    OperationFailed {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
