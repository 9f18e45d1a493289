//! Traced error links
//!
//! An [`ErrorTrace`] wraps an error together with:
//! - the stack frames it added to the chain
//! - an optional cause string
//! - the frame that cause is displayed on

pub mod constructors;
pub mod display;
pub mod types;

pub use types::ErrorTrace;
