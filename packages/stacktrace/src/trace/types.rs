//! Core trace node definition

use crate::capture::{Pc, StackSegment};
use crate::error::BoxError;

/// One link of a traced error chain.
///
/// Holds the wrapped error, the stack frames this link added, and an optional
/// cause anchored to a single frame. Immutable once built; the next link is
/// reachable through [`std::error::Error::source`].
#[derive(Debug)]
pub struct ErrorTrace {
    /// The wrapped error
    pub(crate) err: BoxError,
    /// Frames first recorded by this link, innermost first
    pub(crate) stack: StackSegment,
    /// Annotation shown beside the anchor frame
    pub(crate) cause: String,
    /// Frame the cause is displayed on; may belong to an inner link
    pub(crate) pc: Option<Pc>,
}

impl ErrorTrace {
    /// Copy of the frames recorded by this link
    #[must_use]
    pub fn stack_trace(&self) -> StackSegment {
        self.stack.clone()
    }

    /// Cause attached by this link, empty when none
    #[must_use]
    pub fn cause(&self) -> &str {
        &self.cause
    }

    /// Frame the cause is anchored to
    #[must_use]
    pub fn anchor(&self) -> Option<Pc> {
        self.pc
    }

    /// The wrapped error
    #[must_use]
    pub fn inner(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
        self.err.as_ref()
    }

    /// Consume the link, returning the wrapped error
    #[must_use]
    pub fn into_inner(self) -> BoxError {
        self.err
    }
}
