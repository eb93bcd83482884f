//! Error types for suffixset.

use thiserror::Error;

/// Error type for suffixset operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Pattern is empty once its leading and trailing dots are removed
    #[error("invalid suffix pattern: {0:?}")]
    InvalidPattern(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Filter was run without a field matcher
    #[error("no match function defined, nothing would be written")]
    NoMatcher,
}

/// Result type alias for suffixset operations.
pub type Result<T> = std::result::Result<T, Error>;
