//! Error types for the test harness

use thiserror::Error;

/// Errors that can occur while building test fixtures
#[derive(Debug, Error)]
pub enum TestError {
    /// Failed to build a synthetic image
    #[error("failed to build synthetic image '{name}': {source}")]
    Synthesis {
        name: &'static str,
        #[source]
        source: lesionseg_core::Error,
    },
}

/// Result type for test harness operations
pub type TestResult<T> = Result<T, TestError>;
