//! Capture bounds for arbitrary depths

use cryypt_stacktrace::capture::{callers, resolve};
use proptest::prelude::*;

#[inline(never)]
fn nested(levels: usize, max_depth: usize) -> Vec<usize> {
    if levels == 0 {
        return callers(0, max_depth);
    }
    let stack = nested(levels - 1, max_depth);
    std::hint::black_box(stack)
}

proptest! {
    #[test]
    fn capture_never_exceeds_max_depth(max_depth in 1usize..64, levels in 0usize..16) {
        let stack = nested(levels, max_depth);
        prop_assert!(stack.len() <= max_depth);
        prop_assert!(!stack.is_empty());
    }
}

#[test]
fn capture_starts_at_the_calling_function() {
    let stack = nested(0, 8);
    let key = resolve(stack[0]);
    assert!(key.function.ends_with("::nested"), "{key:?}");
    assert!(key.line > 0);
}

#[test]
fn recursion_is_captured_frame_by_frame() {
    let stack = nested(3, 8);
    let nested_frames = stack
        .iter()
        .map(|&pc| resolve(pc))
        .take_while(|key| key.function.ends_with("::nested"))
        .count();
    assert_eq!(nested_frames, 4);
}
