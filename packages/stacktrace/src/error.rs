//! Error types for the stacktrace crate

use thiserror::Error;

/// Boxed error accepted and produced at the chain boundaries.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors produced by this crate.
///
/// `Message` and `Annotated` are the plain leaves used when no stack is
/// captured; the remaining variants report configuration mistakes.
#[derive(Debug, Error)]
pub enum TraceError {
    /// Plain message with no source
    #[error("{0}")]
    Message(String),

    /// Cause text joined in front of the underlying error
    #[error("{cause}: {source}")]
    Annotated {
        /// Annotation placed in front of the source
        cause: String,
        /// Underlying error
        #[source]
        source: BoxError,
    },

    /// Skip pattern failed to compile
    #[error("Invalid skip pattern: {0}")]
    InvalidSkipPattern(#[from] regex::Error),

    /// Capture depth must allow at least one frame
    #[error("Invalid max depth: expected at least 1, got {0}")]
    InvalidMaxDepth(usize),
}

impl TraceError {
    /// Create a message error
    #[must_use]
    pub fn message(msg: impl Into<String>) -> Self {
        Self::Message(msg.into())
    }

    /// Create an annotated error
    #[must_use]
    pub fn annotated(cause: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self::Annotated {
            cause: cause.into(),
            source: source.into(),
        }
    }
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, TraceError>;
