//! Error types for the CLI

use std::path::PathBuf;

use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI
#[derive(Debug, Error)]
pub enum CliError {
    /// A label the calculator does not know, with its script position
    #[error("line {line}: {source}")]
    Script {
        /// 1-based line number
        line: usize,
        /// Underlying calculator error
        source: pocket_calc::core::CalcError,
    },

    /// Calculator error
    #[error(transparent)]
    Calc(#[from] pocket_calc::core::CalcError),

    /// Failed to read a script file
    #[error("Failed to read {}: {source}", .path.display())]
    ReadScript {
        /// Script path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// IO error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Logging setup error
    #[error("Logging setup failed: {message}")]
    Logging {
        /// Error message
        message: String,
    },
}

impl CliError {
    /// Create a script error at a line
    #[must_use]
    pub fn script(line: usize, source: pocket_calc::core::CalcError) -> Self {
        Self::Script { line, source }
    }

    /// Create a logging setup error
    #[must_use]
    pub fn logging(message: impl Into<String>) -> Self {
        Self::Logging {
            message: message.into(),
        }
    }
}
