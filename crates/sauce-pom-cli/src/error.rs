//! Error types for the CLI

use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI
#[derive(Debug, Error)]
pub enum CliError {
    /// Locator resolution failed
    #[error(transparent)]
    Pom(#[from] sauce_pom::PomError),

    /// Validation found problems
    #[error("{failed} of {checked} locator documents failed validation")]
    CheckFailed {
        /// Pages with problems
        failed: usize,
        /// Pages checked
        checked: usize,
    },

    /// IO error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON output error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Create a check failure
    #[must_use]
    pub const fn check_failed(failed: usize, checked: usize) -> Self {
        Self::CheckFailed { failed, checked }
    }
}
