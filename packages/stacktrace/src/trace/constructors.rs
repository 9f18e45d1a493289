//! Trace constructors
//!
//! Each constructor takes the number of frames between the public entry point
//! and itself (`skip`) and the capture bound to use, so public wrappers and
//! [`crate::Toggle`] can share them.

use super::types::ErrorTrace;
use crate::capture::{self, FrameKey, Pc};
use crate::chain;
use crate::error::{BoxError, TraceError};
use std::collections::HashMap;

impl ErrorTrace {
    /// New root link carrying `msg` as both its error and its cause
    #[inline(never)]
    pub(crate) fn new_caller(skip: usize, max_depth: usize, msg: String) -> Self {
        // Skip [new_caller]
        let stack = capture::callers(skip.saturating_add(1), max_depth);
        if stack.is_empty() {
            log::debug!("stacktrace: no frames captured for new({msg:?})");
        }

        Self {
            err: Box::new(TraceError::Message(msg.clone())),
            pc: stack.first().copied(),
            stack,
            cause: msg,
        }
    }

    /// Promote `err` into a traced chain, returning an existing link unchanged
    #[inline(never)]
    pub(crate) fn wrap_caller(skip: usize, max_depth: usize, err: BoxError) -> Self {
        let err = match err.downcast::<ErrorTrace>() {
            Ok(trace) => return *trace,
            Err(err) => err,
        };

        // Skip [wrap_caller]
        let stack = capture::callers(skip.saturating_add(1), max_depth);
        if stack.is_empty() {
            log::debug!("stacktrace: no frames captured for wrap({err})");
        }

        Self {
            cause: err.to_string(),
            pc: stack.first().copied(),
            stack,
            err,
        }
    }

    /// Attach `cause` at the current call site, recording only frames that
    /// `err`'s chain does not already hold
    #[inline(never)]
    pub(crate) fn annotate_caller(
        skip: usize,
        max_depth: usize,
        err: BoxError,
        cause: String,
    ) -> Self {
        let (pcs, _) = chain::unwrap(err.as_ref());
        let seen: HashMap<FrameKey, Pc> = pcs
            .into_iter()
            .map(|pc| (capture::resolve(pc), pc))
            .collect();

        // Skip [annotate_caller]
        let mut stack = capture::callers(skip.saturating_add(1), max_depth);
        if stack.is_empty() {
            log::debug!("stacktrace: no frames captured for annotate({cause:?})");
            return Self {
                err,
                stack,
                cause,
                pc: None,
            };
        }

        let keys: Vec<FrameKey> = stack.iter().map(|&pc| capture::resolve(pc)).collect();

        // The call site may already be on record, e.g. the line that produced
        // `err` also annotates it. Anchor to the recorded frame since that is
        // the one rendered.
        let pc = seen.get(&keys[0]).copied().unwrap_or(stack[0]);

        // Unresolved frames are never emitted by the chain walk; they cannot
        // start a new suffix.
        let is_new = |key: &FrameKey| !key.function.is_empty() && !seen.contains_key(key);

        match keys.iter().position(is_new) {
            Some(first_new) => {
                stack.drain(..first_new);
            }
            // Every frame is on record: contribute the cause only.
            None => stack.clear(),
        }

        Self {
            err,
            stack,
            cause,
            pc: Some(pc),
        }
    }
}
