//! Program counter capture and symbol resolution

use serde::{Deserialize, Serialize};
use std::ffi::c_void;

/// Return address of one call-stack location
pub type Pc = usize;

/// Program counters recorded by one capture, innermost first
pub type StackSegment = Vec<Pc>;

/// Resolved call site of a program counter.
///
/// Two program counters name the same call site when their keys are equal.
/// Raw addresses are not comparable across captures: two calls written on the
/// same source line return to different addresses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FrameKey {
    /// Source file, empty when no debug info is available
    pub file: String,
    /// Demangled function path without the symbol hash, empty when unresolved
    pub function: String,
    /// Source line, `0` when unknown
    pub line: u32,
}

/// Capture up to `max_depth` program counters of the calling chain.
///
/// `skip` counts the frames directly above this function that belong to the
/// capture machinery. Every function on that path must be `#[inline(never)]`
/// or the count drifts.
///
/// On platforms where the walk cannot find this function's own frame, the
/// unwinder's frames stay at the top of the segment. Those frames are
/// filtered from output, so a cause anchored to one of them is not shown.
#[inline(never)]
pub fn callers(skip: usize, max_depth: usize) -> StackSegment {
    if max_depth == 0 {
        return StackSegment::new();
    }

    let marker = callers as usize;
    let skip_and_depth = skip.saturating_add(max_depth);
    let mut start: Option<usize> = None;
    let mut walked: Vec<Pc> = Vec::new();

    backtrace::trace(|frame| {
        walked.push(frame.ip() as Pc);
        if start.is_none() && frame.symbol_address() as usize == marker {
            start = Some(walked.len());
        }

        match start {
            Some(first) => walked.len() < first.saturating_add(skip_and_depth),
            None => true,
        }
    });

    let first = match start {
        Some(first) => first.saturating_add(skip),
        None => {
            // Own frame not found, keep everything past the requested skip.
            log::warn!("stacktrace capture could not locate its own frame; causes may be hidden");
            skip
        }
    };

    walked.into_iter().skip(first).take(max_depth).collect()
}

/// Resolve a program counter to its call site.
///
/// The address is a return address; `backtrace::resolve` maps it back onto the
/// call instruction before lookup. Only the innermost symbol is used when the
/// address covers inlined frames.
#[must_use]
pub fn resolve(pc: Pc) -> FrameKey {
    let mut key: Option<FrameKey> = None;

    backtrace::resolve(pc as *mut c_void, |symbol| {
        if key.is_some() {
            return;
        }

        key = Some(FrameKey {
            file: symbol
                .filename()
                .map(|path| path.display().to_string())
                .unwrap_or_default(),
            function: symbol
                .name()
                .map(|name| format!("{name:#}"))
                .unwrap_or_default(),
            line: symbol.lineno().unwrap_or(0),
        });
    });

    key.unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[inline(never)]
    fn capture_here(max_depth: usize) -> StackSegment {
        callers(0, max_depth)
    }

    #[test]
    fn first_frame_is_the_caller() {
        let stack = capture_here(4);
        assert!(!stack.is_empty());

        let key = resolve(stack[0]);
        assert!(
            key.function.ends_with("capture_here"),
            "unexpected innermost frame: {key:?}"
        );
    }

    #[test]
    fn zero_depth_captures_nothing() {
        assert!(capture_here(0).is_empty());
    }

    #[test]
    fn depth_bounds_capture() {
        assert!(capture_here(1).len() <= 1);
        assert!(capture_here(3).len() <= 3);
    }

    #[test]
    fn unresolvable_pc_degrades_to_empty_key() {
        let key = resolve(0);
        assert!(key.function.is_empty());
    }
}
