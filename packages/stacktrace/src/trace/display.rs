//! Display and trait implementations for ErrorTrace

use super::types::ErrorTrace;
use std::fmt;

impl fmt::Display for ErrorTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.err.to_string();

        // Same shape as `context: source`, without repeating a message that is
        // already the wrapped error's text.
        if !self.cause.is_empty() && self.cause != inner {
            write!(f, "{}: ", self.cause)?;
        }

        f.write_str(&inner)
    }
}

impl std::error::Error for ErrorTrace {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.err.as_ref())
    }
}
