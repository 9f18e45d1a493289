//! Call-site capturers that can be switched off at runtime
//!
//! A [`Toggle`] is usually declared once per module:
//!
//! ```
//! use cryypt_stacktrace::Toggle;
//!
//! static TRACE: Toggle = Toggle::caller(0);
//!
//! fn load(id: u32) -> Result<(), cryypt_stacktrace::BoxError> {
//!     Err(TRACE.new(format!("record {id} not found")))
//! }
//!
//! TRACE.disable();
//! let err = load(7).unwrap_err();
//! assert!(cryypt_stacktrace::frames(err.as_ref()).is_empty());
//! ```

use crate::config;
use crate::error::{BoxError, TraceError};
use crate::trace::ErrorTrace;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

/// Capturer bound to a fixed skip depth with an on/off switch.
///
/// Enabled, it behaves like [`crate::new`], [`crate::wrap`] and
/// [`crate::annotate`]. Disabled, it falls back to [`Passthrough`] and records
/// no frames. Flipping the switch affects calls that start afterwards.
#[derive(Debug)]
pub struct Toggle {
    skip: usize,
    max_depth: Option<usize>,
    enabled: AtomicBool,
}

impl Toggle {
    /// Enabled capturer skipping `skip` frames above the calling function
    #[must_use]
    pub const fn caller(skip: usize) -> Self {
        Self {
            skip,
            max_depth: None,
            enabled: AtomicBool::new(true),
        }
    }

    /// Use `depth` instead of the process-wide [`config::max_depth`]
    #[must_use]
    pub const fn with_max_depth(self, depth: usize) -> Self {
        Self {
            max_depth: Some(depth),
            ..self
        }
    }

    /// Turn capture on
    pub fn enable(&self) {
        if !self.enabled.swap(true, Ordering::SeqCst) {
            log::debug!("stacktrace toggle enabled (skip: {})", self.skip);
        }
    }

    /// Turn capture off
    pub fn disable(&self) {
        if self.enabled.swap(false, Ordering::SeqCst) {
            log::debug!("stacktrace toggle disabled (skip: {})", self.skip);
        }
    }

    /// Whether capture is on
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }

    /// See [`crate::new`]
    #[inline(never)]
    pub fn new(&self, msg: impl fmt::Display) -> BoxError {
        if self.is_enabled() {
            // Skip [Toggle::new]
            return Box::new(ErrorTrace::new_caller(
                self.skip.saturating_add(1),
                self.depth(),
                msg.to_string(),
            ));
        }

        Passthrough.new(msg)
    }

    /// See [`crate::wrap`]
    #[inline(never)]
    pub fn wrap(&self, err: impl Into<BoxError>) -> BoxError {
        if self.is_enabled() {
            // Skip [Toggle::wrap]
            return Box::new(ErrorTrace::wrap_caller(
                self.skip.saturating_add(1),
                self.depth(),
                err.into(),
            ));
        }

        Passthrough.wrap(err)
    }

    /// See [`crate::annotate`]
    #[inline(never)]
    pub fn annotate(&self, err: impl Into<BoxError>, cause: impl fmt::Display) -> BoxError {
        if self.is_enabled() {
            // Skip [Toggle::annotate]
            return Box::new(ErrorTrace::annotate_caller(
                self.skip.saturating_add(1),
                self.depth(),
                err.into(),
                cause.to_string(),
            ));
        }

        Passthrough.annotate(err, cause)
    }

    fn depth(&self) -> usize {
        self.max_depth.unwrap_or_else(config::max_depth)
    }
}

/// Capturer that never records frames.
///
/// Produces the same messages as the traced constructors using plain
/// [`TraceError`] values.
#[derive(Debug, Clone, Copy, Default)]
pub struct Passthrough;

impl Passthrough {
    /// Plain message error
    pub fn new(&self, msg: impl fmt::Display) -> BoxError {
        Box::new(TraceError::message(msg.to_string()))
    }

    /// `err`, unchanged
    pub fn wrap(&self, err: impl Into<BoxError>) -> BoxError {
        err.into()
    }

    /// `err` prefixed with `cause: `
    pub fn annotate(&self, err: impl Into<BoxError>, cause: impl fmt::Display) -> BoxError {
        Box::new(TraceError::annotated(cause.to_string(), err))
    }
}
