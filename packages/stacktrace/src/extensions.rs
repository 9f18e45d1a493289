//! Extension traits for `Result` and `Option`
//!
//! `Ok` and `Some` pass through untouched and capture nothing.

use crate::config;
use crate::error::BoxError;
use crate::trace::ErrorTrace;
use std::fmt;

/// Trace the error side of a `Result`
pub trait ResultExt<T> {
    /// [`crate::wrap`] the error
    fn traced(self) -> Result<T, ErrorTrace>;

    /// [`crate::annotate`] the error with `cause`
    fn annotate<C: fmt::Display>(self, cause: C) -> Result<T, ErrorTrace>;

    /// [`crate::annotate`] the error with a lazily built cause
    fn annotate_with<C: fmt::Display, F: FnOnce() -> C>(self, cause: F) -> Result<T, ErrorTrace>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<BoxError>,
{
    #[inline(never)]
    fn traced(self) -> Result<T, ErrorTrace> {
        match self {
            Ok(value) => Ok(value),
            // Skip [traced]
            Err(err) => Err(ErrorTrace::wrap_caller(1, config::max_depth(), err.into())),
        }
    }

    #[inline(never)]
    fn annotate<C: fmt::Display>(self, cause: C) -> Result<T, ErrorTrace> {
        match self {
            Ok(value) => Ok(value),
            // Skip [annotate]
            Err(err) => Err(ErrorTrace::annotate_caller(
                1,
                config::max_depth(),
                err.into(),
                cause.to_string(),
            )),
        }
    }

    #[inline(never)]
    fn annotate_with<C: fmt::Display, F: FnOnce() -> C>(self, cause: F) -> Result<T, ErrorTrace> {
        match self {
            Ok(value) => Ok(value),
            // Skip [annotate_with]
            Err(err) => Err(ErrorTrace::annotate_caller(
                1,
                config::max_depth(),
                err.into(),
                cause().to_string(),
            )),
        }
    }
}

/// Turn a missing value into a traced error
pub trait OptionExt<T> {
    /// `None` becomes [`crate::new`] with `msg`
    fn ok_or_trace<M: fmt::Display>(self, msg: M) -> Result<T, ErrorTrace>;
}

impl<T> OptionExt<T> for Option<T> {
    #[inline(never)]
    fn ok_or_trace<M: fmt::Display>(self, msg: M) -> Result<T, ErrorTrace> {
        match self {
            Some(value) => Ok(value),
            // Skip [ok_or_trace]
            None => Err(ErrorTrace::new_caller(1, config::max_depth(), msg.to_string())),
        }
    }
}
