//! Chain flattening
//!
//! Walks the `source()` chain of an error, collecting the frames of every
//! [`ErrorTrace`] link into a single list without repeated call sites.

use crate::capture::{self, FrameKey, Pc};
use crate::trace::ErrorTrace;
use std::collections::HashMap;
use std::error::Error;

/// Flattened view of a chain.
#[derive(Debug, Default)]
pub(crate) struct Walk {
    /// Frames from the original failure out to the most recent call site
    pub frames: Vec<(Pc, FrameKey)>,
    /// Cause text keyed by the frame it is displayed on
    pub causes: HashMap<Pc, String>,
}

/// Traced links of a chain, most recently attached first.
///
/// Foreign errors between links are stepped over.
pub fn nodes<'a>(err: &'a (dyn Error + 'static)) -> impl Iterator<Item = &'a ErrorTrace> + 'a {
    std::iter::successors(Some(err), |e| (*e).source())
        .filter_map(|e| e.downcast_ref::<ErrorTrace>())
}

/// Flatten a chain into ordered program counters and their causes.
///
/// Frames recorded by inner links come before frames recorded by outer ones,
/// so the list reads from the original failure to the latest call site.
#[must_use]
pub fn unwrap(err: &(dyn Error + 'static)) -> (Vec<Pc>, HashMap<Pc, String>) {
    let walk = walk(err);
    let pcs = walk.frames.into_iter().map(|(pc, _)| pc).collect();
    (pcs, walk.causes)
}

pub(crate) fn walk(err: &(dyn Error + 'static)) -> Walk {
    let mut frames: Vec<(Pc, FrameKey)> = Vec::new();
    let mut emitted: HashMap<FrameKey, Pc> = HashMap::new();
    let mut anchors: Vec<(Pc, &str)> = Vec::new();

    for node in nodes(err) {
        if let Some(pc) = node.pc {
            if !node.cause.is_empty() {
                anchors.push((pc, node.cause.as_str()));
            }
        }

        let mut ordered = Vec::new();
        for &pc in &node.stack {
            let key = capture::resolve(pc);
            if key.function.is_empty() {
                continue;
            }

            // Segments share the caller's suffix: once a call site is on
            // record, the rest of this segment is too.
            if emitted.contains_key(&key) {
                break;
            }

            emitted.insert(key.clone(), pc);
            ordered.push((pc, key));
        }

        // Segment is innermost first; the accumulated list is reversed once
        // at the end, so store it outermost first.
        ordered.reverse();
        frames.extend(ordered);
    }

    frames.reverse();

    // Inner links are visited last and overwrite outer ones sharing an anchor.
    let mut causes = HashMap::new();
    for (pc, cause) in anchors {
        let pc = emitted
            .get(&capture::resolve(pc))
            .copied()
            .unwrap_or(pc);
        causes.insert(pc, cause.to_owned());
    }

    Walk { frames, causes }
}
