use thiserror::Error;

/// Result type returned by fallible grid routines.
pub type GridResult<T> = Result<T, GridError>;

/// Error encountered while building or advancing a [`Grid`](crate::Grid).
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum GridError {
    #[error("configuration contains no rows")]
    EmptyConfiguration,
    #[error("configuration rows are empty")]
    ZeroWidth,
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("worker count must be at least 1")]
    InvalidWorkerCount,
    #[error("worker #{worker} failed during generation {generation}")]
    GenerationFailure { generation: u64, worker: usize },
}
