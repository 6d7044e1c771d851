//! Shared error types for the application

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for profilemap operations
///
/// The core computations never fail; errors arise only at the edges, when
/// input records are read and parsed or a report is written out.
#[derive(Debug, Error)]
pub enum Error {
    /// Input record errors (answer, link, catalog and score-map files)
    #[error("Input error: {message}")]
    Input {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Generic errors with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create an input error with path context
    pub fn input(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::Input {
            message: message.into(),
            path: Some(path.into()),
            source: None,
        }
    }

    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        Self::WithContext {
            context: context.into(),
            message: self.to_string(),
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }
}
