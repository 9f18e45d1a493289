//! Toggle and passthrough behaviour

use cryypt_stacktrace::{self as stacktrace, BoxError, ErrorTrace, Toggle};

static STRACE: Toggle = stacktrace::caller(0);
static HELPER: Toggle = stacktrace::caller(1);
static FLIPPED: Toggle = stacktrace::caller(0);

fn handle_product() -> BoxError {
    STRACE.annotate(std::fmt::Error, r#"product "lego" not found"#)
}

#[inline(never)]
fn fail(msg: &str) -> BoxError {
    HELPER.new(msg)
}

fn call_site() -> BoxError {
    fail("reported from the call site")
}

fn flipped() -> BoxError {
    FLIPPED.new("flip")
}

#[test]
fn enabled_toggle_records_the_call_site() {
    let err = handle_product();
    let frames = stacktrace::frames(err.as_ref());

    assert!(!frames.is_empty());
    assert!(frames[0].function.ends_with("::handle_product"), "{frames:#?}");
    assert_eq!(frames[0].cause, r#"product "lego" not found"#);
    assert_eq!(
        err.to_string(),
        r#"product "lego" not found: an error occurred when formatting an argument"#
    );
}

#[test]
fn skip_hides_helper_frames() {
    let err = call_site();
    let frames = stacktrace::frames(err.as_ref());

    assert!(!frames.is_empty());
    assert!(frames[0].function.ends_with("::call_site"), "{frames:#?}");
    assert!(frames.iter().all(|frame| !frame.function.ends_with("::fail")));
}

#[test]
fn disabling_falls_back_to_plain_errors() {
    assert!(!stacktrace::frames(flipped().as_ref()).is_empty());

    FLIPPED.disable();
    assert!(!FLIPPED.is_enabled());

    let err = flipped();
    assert!(stacktrace::frames(err.as_ref()).is_empty());
    assert!(err.downcast_ref::<ErrorTrace>().is_none());
    assert_eq!(err.to_string(), "flip");

    let annotated = FLIPPED.annotate(std::fmt::Error, "stacktrace is disabled");
    assert_eq!(
        annotated.to_string(),
        "stacktrace is disabled: an error occurred when formatting an argument"
    );
    assert!(stacktrace::frames(annotated.as_ref()).is_empty());
    assert_eq!(stacktrace::sprint(annotated.as_ref()).lines().count(), 1);

    let wrapped = FLIPPED.wrap(std::fmt::Error);
    assert!(wrapped.downcast_ref::<std::fmt::Error>().is_some());

    FLIPPED.enable();
    assert!(FLIPPED.is_enabled());
    assert!(!stacktrace::frames(flipped().as_ref()).is_empty());
}

#[test]
fn passthrough_matches_traced_messages() {
    let plain = stacktrace::passthrough();

    let root = plain.new("root");
    let traced_root = stacktrace::new("root");
    assert_eq!(root.to_string(), traced_root.to_string());

    let annotated = plain.annotate(root, "from b");
    let traced = stacktrace::annotate(traced_root, "from b");
    assert_eq!(annotated.to_string(), traced.to_string());

    let source = std::error::Error::source(annotated.as_ref()).expect("annotated keeps its source");
    assert_eq!(source.to_string(), "root");
}

#[test]
fn toggle_depth_override_bounds_capture() {
    static SHALLOW: Toggle = Toggle::caller(0).with_max_depth(2);

    let err = SHALLOW.new("shallow");
    let trace = err.downcast_ref::<ErrorTrace>().expect("traced");
    assert!(trace.stack_trace().len() <= 2);
    assert!(!trace.stack_trace().is_empty());
}

#[test]
fn unbounded_depths_capture_without_overflow() {
    static UNBOUNDED: Toggle = Toggle::caller(0).with_max_depth(usize::MAX);
    static FAR_SKIP: Toggle = Toggle::caller(usize::MAX);

    let err = UNBOUNDED.new("x");
    let trace = err.downcast_ref::<ErrorTrace>().expect("traced");
    assert!(!trace.stack_trace().is_empty());
    assert_eq!(err.to_string(), "x");

    let annotated = UNBOUNDED.annotate(err, "y");
    assert_eq!(annotated.to_string(), "y: x");
    assert!(!stacktrace::frames(annotated.as_ref()).is_empty());

    let skipped = FAR_SKIP.new("nothing left");
    let trace = skipped.downcast_ref::<ErrorTrace>().expect("traced");
    assert!(trace.stack_trace().is_empty());
    assert_eq!(trace.anchor(), None);
}
