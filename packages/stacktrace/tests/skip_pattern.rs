//! Replacing the noise filter
//!
//! Kept in its own test binary: the pattern is global and tests run in parallel.

use cryypt_stacktrace::{self as stacktrace, FrameKey, TraceError, config, filter};

fn traced() -> stacktrace::ErrorTrace {
    stacktrace::new("filtered")
}

fn key(function: &str) -> FrameKey {
    FrameKey {
        file: "src/app.rs".to_string(),
        function: function.to_string(),
        line: 7,
    }
}

#[test]
fn skip_pattern_is_replaceable() {
    let err = traced();
    let before = stacktrace::frames(&err);
    assert!(before.iter().any(|frame| frame.function.ends_with("::traced")));

    stacktrace::set_skip_pattern(r"::traced$").expect("valid pattern");
    let after = stacktrace::frames(&err);
    assert!(after.iter().all(|frame| !frame.function.ends_with("::traced")));
    assert!(filter::skip_frame(&key("skip_pattern::traced")));
    assert!(!filter::skip_frame(&key("std::rt::lang_start")));

    assert!(matches!(
        stacktrace::set_skip_pattern("("),
        Err(TraceError::InvalidSkipPattern(_))
    ));
    assert!(filter::skip_frame(&key("skip_pattern::traced")));

    config::clear_skip_pattern();
    assert!(config::skip_pattern().is_none());
    assert!(!filter::skip_frame(&key("std::rt::lang_start")));
    assert!(filter::skip_frame(&key("")));

    stacktrace::reset_skip_pattern();
    assert_eq!(
        config::skip_pattern().map(|pattern| pattern.as_str().to_string()),
        Some(stacktrace::DEFAULT_SKIP_PATTERN.to_string())
    );
    assert_eq!(stacktrace::frames(&err), before);

    // The raw view never filters.
    let (pcs, _) = stacktrace::unwrap(&err);
    assert!(pcs.len() >= before.len());
}
