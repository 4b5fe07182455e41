//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur while building test fixtures
#[derive(Debug, Error)]
pub enum TestError {
    /// A text fixture could not be parsed
    #[error("invalid fixture at row {row}: {message}")]
    InvalidFixture { row: usize, message: String },

    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] saccade_core::Error),
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
