//! Noise frame filtering

use crate::capture::{FrameKey, Pc};
use crate::config;
use regex::Regex;

/// Whether a frame is hidden from rendered output.
///
/// Unresolved frames and frames without a source location are always hidden;
/// otherwise the function and file are checked against
/// [`config::skip_pattern`].
#[must_use]
pub fn skip_frame(frame: &FrameKey) -> bool {
    is_noise(frame, config::skip_pattern().as_deref())
}

/// Keep the frames that survive [`skip_frame`], preserving order
pub(crate) fn filter_frames(frames: Vec<(Pc, FrameKey)>) -> Vec<(Pc, FrameKey)> {
    let pattern = config::skip_pattern();

    frames
        .into_iter()
        .filter(|(_, frame)| !is_noise(frame, pattern.as_deref()))
        .collect()
}

fn is_noise(frame: &FrameKey, pattern: Option<&Regex>) -> bool {
    if frame.function.is_empty() || frame.file.is_empty() {
        return true;
    }

    pattern.is_some_and(|pattern| pattern.is_match(&frame.function) || pattern.is_match(&frame.file))
}
