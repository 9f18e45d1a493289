//! Process-wide capture configuration
//!
//! Two knobs are shared by every capture in the process:
//! - `max_depth`: upper bound on program counters kept per capture
//! - `skip_pattern`: regex deciding which resolved frames are noise
//!
//! Both are meant to be set once at startup. Reads are lock-free; a capture
//! racing with `set_max_depth` sees either the old or the new bound, which
//! only changes how much history is retained.

use crate::error::{Result, TraceError};
use arc_swap::ArcSwapOption;
use once_cell::sync::Lazy;
use regex::Regex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Default number of frames kept per capture
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Default noise filter.
///
/// Matches standard library, test harness and `backtrace` internals (including
/// their `<Type as Trait>` impl forms), symbols starting with an underscore,
/// toolchain sources under `/rustc/`, and files whose name starts with `_`.
pub const DEFAULT_SKIP_PATTERN: &str =
    r"^(?:<?(?:std|core|alloc|test|backtrace)::|_|/rustc/)|/_[^/]*$";

static MAX_DEPTH: AtomicUsize = AtomicUsize::new(DEFAULT_MAX_DEPTH);

static SKIP_PATTERN: Lazy<ArcSwapOption<Regex>> =
    Lazy::new(|| ArcSwapOption::new(Regex::new(DEFAULT_SKIP_PATTERN).ok().map(Arc::new)));

/// Current capture bound
#[must_use]
pub fn max_depth() -> usize {
    MAX_DEPTH.load(Ordering::Relaxed)
}

/// Set the capture bound. A depth of zero disables capture entirely.
pub fn set_max_depth(depth: usize) {
    let previous = MAX_DEPTH.swap(depth, Ordering::Relaxed);
    log::debug!("stacktrace max depth changed: {previous} -> {depth}");
}

/// Set the capture bound, rejecting a depth that could never record a frame
pub fn try_set_max_depth(depth: usize) -> Result<()> {
    set_max_depth(checked_max_depth(depth)?);
    Ok(())
}

/// Validate a capture bound
pub fn checked_max_depth(depth: usize) -> Result<usize> {
    if depth == 0 {
        return Err(TraceError::InvalidMaxDepth(depth));
    }
    Ok(depth)
}

/// Current skip pattern, if any
#[must_use]
pub fn skip_pattern() -> Option<Arc<Regex>> {
    SKIP_PATTERN.load_full()
}

/// Replace the skip pattern
pub fn set_skip_pattern(pattern: &str) -> Result<()> {
    let regex = Regex::new(pattern)?;
    SKIP_PATTERN.store(Some(Arc::new(regex)));
    log::debug!("stacktrace skip pattern set to {pattern:?}");
    Ok(())
}

/// Restore [`DEFAULT_SKIP_PATTERN`]
pub fn reset_skip_pattern() {
    SKIP_PATTERN.store(Regex::new(DEFAULT_SKIP_PATTERN).ok().map(Arc::new));
}

/// Remove the skip pattern; only unresolved frames are dropped afterwards
pub fn clear_skip_pattern() {
    SKIP_PATTERN.store(None);
}
