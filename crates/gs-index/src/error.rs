//! Index error type.

use thiserror::Error;

/// Errors produced by `gs-index`.
///
/// Every failure is a caller-input problem reported synchronously; nothing is
/// retried, clamped, or swallowed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IndexError {
    /// Malformed point set or pole configuration.  Raised at construction;
    /// no index value is produced.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Bad query location or radius.  Raised at query time.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

pub type IndexResult<T> = Result<T, IndexError>;
