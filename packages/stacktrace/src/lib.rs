//! Error stack traces with per-frame cause annotations
//!
//! This crate attaches captured call stacks to errors as they propagate:
//! - [`new`] creates a traced error at the current call site
//! - [`wrap`] promotes any error into a traced chain (idempotent)
//! - [`annotate`] attaches a cause to the current call site, recording only
//!   frames the chain does not already hold
//!
//! Chains are inspected with [`frames`], [`unwrap`], [`sprint`] and
//! [`sprint_reversed`].
//!
//! ```
//! use cryypt_stacktrace as stacktrace;
//!
//! fn find_product(id: u64) -> stacktrace::ErrorTrace {
//!     stacktrace::annotate!(std::fmt::Error, "product id {id:?}")
//! }
//!
//! let err = stacktrace::annotate(find_product(42), "failed to find product");
//! assert_eq!(
//!     err.to_string(),
//!     "failed to find product: product id 42: an error occurred when formatting an argument"
//! );
//!
//! // Frames are only listed when debug info is available.
//! let report = stacktrace::sprint(&err);
//! assert!(report.starts_with("Error: failed to find product"));
//! ```

#![forbid(unsafe_code)]

pub mod capture;
pub mod chain;
pub mod config;
pub mod error;
pub mod extensions;
pub mod filter;
pub mod logging;
#[doc(hidden)]
pub mod macros;
pub mod render;
pub mod toggle;
pub mod trace;

use std::collections::HashMap;
use std::fmt;

pub use capture::{FrameKey, Pc, StackSegment};
pub use config::{
    DEFAULT_MAX_DEPTH, DEFAULT_SKIP_PATTERN, max_depth, reset_skip_pattern, set_max_depth,
    set_skip_pattern, try_set_max_depth,
};
pub use error::{BoxError, Result, TraceError};
pub use extensions::{OptionExt, ResultExt};
pub use logging::TraceLogger;
pub use render::{Frame, frames, frames_json, sprint, sprint_reversed, sprint_with};
pub use toggle::{Passthrough, Toggle};
pub use trace::ErrorTrace;

/// Create an error carrying the current stack.
///
/// The message doubles as the cause of the innermost frame.
#[inline(never)]
pub fn new(msg: impl fmt::Display) -> ErrorTrace {
    // Skip [new]
    ErrorTrace::new_caller(1, config::max_depth(), msg.to_string())
}

/// Attach the current stack to `err`.
///
/// An error that already is an [`ErrorTrace`] is returned unchanged, so
/// wrapping twice never duplicates frames.
#[inline(never)]
pub fn wrap(err: impl Into<BoxError>) -> ErrorTrace {
    // Skip [wrap]
    ErrorTrace::wrap_caller(1, config::max_depth(), err.into())
}

/// Attach `cause` to the current call site of `err`.
///
/// Frames already recorded further down the chain are not recorded again. If
/// the call site itself is already on record, the cause is displayed on that
/// recorded frame.
///
/// Several `annotate` calls that differ only by source line inside the same
/// recursion, such as one per `match` arm, resolve to frames that are already
/// on record and therefore add causes without adding frames.
#[inline(never)]
pub fn annotate(err: impl Into<BoxError>, cause: impl fmt::Display) -> ErrorTrace {
    // Skip [annotate]
    ErrorTrace::annotate_caller(1, config::max_depth(), err.into(), cause.to_string())
}

/// Raw flattened trace of `err` and the causes keyed by program counter.
///
/// Unlike [`frames`], nothing is filtered.
#[must_use]
pub fn unwrap(err: &(dyn std::error::Error + 'static)) -> (Vec<Pc>, HashMap<Pc, String>) {
    chain::unwrap(err)
}

/// Capturer for call sites `skip` frames above the function using it
#[must_use]
pub const fn caller(skip: usize) -> Toggle {
    Toggle::caller(skip)
}

/// Capturer that never records frames
#[must_use]
pub const fn passthrough() -> Passthrough {
    Passthrough
}
