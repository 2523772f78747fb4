//! Local extremal-point searches over one worker's slice.
//!
//! Both searches share one shape: scan the worker's range and return the
//! locally best point index under a comparison predicate. An empty range
//! returns the seed unchanged, which makes the later reduction a no-op
//! contribution for workers without points.

use std::sync::atomic::{AtomicBool, Ordering};

use glam::DVec2;

use crate::orientation::{orient, Orientation};

use super::partition::WorkerRange;

/// Index of the leftmost point in `range`, seeded with global index 0.
///
/// The comparison is strict `<` on x, so exact ties resolve to the point
/// stored at the smallest index in scan order.
pub(crate) fn local_leftmost(points: &[DVec2], range: WorkerRange) -> usize {
    let mut best = 0;
    for i in range.indices() {
        if points[i].x < points[best].x {
            best = i;
        }
    }
    best
}

/// Refine the next-vertex candidate for the hull edge leaving `cur`.
///
/// Seeded with the first unmarked index in cyclic order after `cur`; every
/// unmarked index j in `range` that lies strictly to the left of the edge
/// `cur -> candidate` replaces the candidate. Already-accepted points are
/// skipped so an interior revisit can never close the hull prematurely.
///
/// The seed scan keeps the candidate edge non-degenerate: the controller
/// marks every coordinate duplicate of an accepted vertex, so an unmarked
/// seed never coincides with `points[cur]`. If every index is marked the
/// seed falls back to `cur` itself, which the controller treats as fatal.
pub(crate) fn local_next(
    points: &[DVec2],
    range: WorkerRange,
    cur: usize,
    accepted: &[AtomicBool],
) -> usize {
    let n = points.len();
    let mut next = cur;
    for step in 1..=n {
        let j = (cur + step) % n;
        if !accepted[j].load(Ordering::Relaxed) {
            next = j;
            break;
        }
    }
    for j in range.indices() {
        if accepted[j].load(Ordering::Relaxed) {
            continue;
        }
        if orient(points[cur], points[next], points[j]) == Orientation::Left {
            next = j;
        }
    }
    next
}
