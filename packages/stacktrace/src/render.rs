//! Human-readable and JSON rendering of traced chains
//!
//! Rendering re-walks the chain on every call; nothing is cached.
//!
//! ```text
//! Error: baz: bar: foo
//!     Origin is: foo
//!         at app::foo (in src/app.rs:41)
//!     Caused by: bar
//!         at app::bar (in src/app.rs:47)
//!     Ends here: baz
//!         at app::baz (in src/app.rs:51)
//! ```

use crate::capture::{FrameKey, Pc};
use crate::{chain, filter};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::error::Error;
use std::fmt::Write as _;
use std::path::Path;

const INDENT: &str = "    ";
const HEAD: &str = "Origin is:";
const TAIL: &str = "Ends here:";
const BODY: &str = "Caused by:";

/// One displayed frame of a traced chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    /// Position in the trace, starting at 1 for the origin
    pub id: usize,
    /// Cause anchored to this frame, empty when none
    pub cause: String,
    /// Source file as recorded in debug info
    pub file: String,
    /// Source line
    pub line: u32,
    /// Demangled function path
    pub function: String,
}

/// Render `err` from the origin to the latest call site
#[must_use]
pub fn sprint(err: &(dyn Error + 'static)) -> String {
    sprint_with(err, false)
}

/// Render `err` from the latest call site back to the origin
#[must_use]
pub fn sprint_reversed(err: &(dyn Error + 'static)) -> String {
    sprint_with(err, true)
}

/// Render `err`, optionally with the frame order reversed.
///
/// Labels are assigned on the forward order, so a reversed report starts with
/// `Ends here:` and finishes with `Origin is:`.
#[must_use]
pub fn sprint_with(err: &(dyn Error + 'static), reversed: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Error: {err}");

    let walk = chain::walk(err);
    let frames = filter::filter_frames(walk.frames);
    let labels = label_frames(&frames, &walk.causes);

    let mut rows: Vec<(Option<String>, FrameKey)> = labels
        .into_iter()
        .zip(frames)
        .map(|(label, (_, frame))| (label, frame))
        .collect();
    if reversed {
        rows.reverse();
    }

    let last = rows.len().saturating_sub(1);
    for (i, (label, frame)) in rows.iter().enumerate() {
        if let Some(label) = label {
            let _ = writeln!(out, "{INDENT}{label}");
        }
        let _ = write!(out, "{INDENT}{INDENT}{}", format_frame(frame));
        if i != last {
            out.push('\n');
        }
    }

    out
}

/// Displayed frames of `err`, origin first
#[must_use]
pub fn frames(err: &(dyn Error + 'static)) -> Vec<Frame> {
    let walk = chain::walk(err);

    filter::filter_frames(walk.frames)
        .into_iter()
        .enumerate()
        .map(|(i, (pc, frame))| Frame {
            id: i + 1,
            cause: walk.causes.get(&pc).cloned().unwrap_or_default(),
            file: frame.file,
            line: frame.line,
            function: frame.function,
        })
        .collect()
}

/// [`frames`] as pretty-printed JSON
pub fn frames_json(err: &(dyn Error + 'static)) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&frames(err))
}

/// Label line for each frame.
///
/// A lone frame gets none: its cause is the error message printed above it.
fn label_frames(frames: &[(Pc, FrameKey)], causes: &HashMap<Pc, String>) -> Vec<Option<String>> {
    if frames.len() < 2 {
        return vec![None; frames.len()];
    }

    let last = frames.len() - 1;
    frames
        .iter()
        .enumerate()
        .map(|(i, (pc, _))| {
            let cause = causes.get(pc).filter(|cause| !cause.is_empty());
            let label = match i {
                0 => HEAD,
                i if i == last => TAIL,
                _ if cause.is_some() => BODY,
                _ => return None,
            };

            Some(match cause {
                Some(cause) => format!("{label} {cause}"),
                None => label.to_string(),
            })
        })
        .collect()
}

fn format_frame(frame: &FrameKey) -> String {
    format!(
        "at {} (in {}:{})",
        pretty_function(&frame.function),
        pretty_file(&frame.file),
        frame.line
    )
}

/// Last two path segments of a function, e.g. `handlers::find_product`.
///
/// `::` inside generic arguments does not split.
fn pretty_function(function: &str) -> &str {
    let bytes = function.as_bytes();
    let mut depth = 0usize;
    let mut cuts = Vec::new();

    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'<' => depth += 1,
            b'>' => depth = depth.saturating_sub(1),
            b':' if depth == 0 && bytes.get(i + 1) == Some(&b':') => {
                cuts.push(i);
                i += 1;
            }
            _ => {}
        }
        i += 1;
    }

    match cuts.len() {
        0 | 1 => function,
        n => &function[cuts[n - 2] + 2..],
    }
}

/// File path relative to the working directory when it lies under it
fn pretty_file(file: &str) -> String {
    let Ok(wd) = std::env::current_dir() else {
        return file.to_string();
    };

    relative_to(file, &wd)
}

fn relative_to(file: &str, base: &Path) -> String {
    match Path::new(file).strip_prefix(base) {
        Ok(rest) => rest.display().to_string(),
        Err(_) => file.to_string(),
    }
}
