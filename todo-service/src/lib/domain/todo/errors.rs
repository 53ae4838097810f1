use thiserror::Error;

/// Error for TodoTitle validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TodoTitleError {
    #[error("Title must not be empty")]
    Empty,

    #[error("Title too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Top-level error for todo operations
#[derive(Debug, Clone, Error)]
pub enum TodoError {
    /// Only reachable when a stored row fails re-validation on read
    #[error("Invalid title: {0}")]
    InvalidTitle(#[from] TodoTitleError),

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),
}
