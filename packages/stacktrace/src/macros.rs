//! Formatting front-ends for the trace constructors

/// Create a traced error from a format string, like [`crate::new`]
#[macro_export]
macro_rules! traced {
    ($($arg:tt)*) => {
        $crate::new(::std::format!($($arg)*))
    };
}

/// Annotate an error with a formatted cause, like [`crate::annotate`]
#[macro_export]
macro_rules! annotate {
    ($err:expr, $($arg:tt)*) => {
        $crate::annotate($err, ::std::format!($($arg)*))
    };
}

/// Return early with a traced error
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return ::std::result::Result::Err($crate::traced!($($arg)*).into())
    };
}

/// Return early with a traced error unless a condition holds
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($arg:tt)*) => {
        if !$cond {
            $crate::bail!($($arg)*);
        }
    };
}
