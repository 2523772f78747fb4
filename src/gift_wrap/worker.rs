//! Per-worker controller for the gift wrapping loop.
//!
//! Every worker runs the same state machine in lockstep: agree on the
//! leftmost starting vertex once, then repeat scan / reduce / mark rounds
//! until the wrap returns to the start. Exactly one worker (rank 0, the
//! coordinator) additionally owns the growing hull.
//!
//! Fatal conditions are computed from state every worker observes
//! identically after the same barrier crossing, so all workers return the
//! same error in the same round and none is ever left waiting for a peer.

use std::sync::atomic::{AtomicBool, Ordering};

use glam::DVec2;

use crate::hull::HullAccumulator;
use crate::orientation::{orient, Orientation};
use crate::{ConvexHull, HullError};

use super::exchange::CandidateExchange;
use super::partition::{worker_range, WorkerRange};
use super::search::{local_leftmost, local_next};

/// One member of the worker group.
///
/// All members are symmetric except that the coordinator also accumulates
/// the hull; the point set and the accepted-marker array are shared
/// read-mostly state borrowed for the duration of the computation.
pub(crate) struct Worker<'a> {
    rank: usize,
    points: &'a [DVec2],
    range: WorkerRange,
    exchange: &'a CandidateExchange,
    accepted: &'a [AtomicBool],
}

impl<'a> Worker<'a> {
    pub(crate) fn new(
        rank: usize,
        points: &'a [DVec2],
        exchange: &'a CandidateExchange,
        accepted: &'a [AtomicBool],
    ) -> Self {
        Self {
            rank,
            points,
            range: worker_range(rank, exchange.size(), points.len()),
            exchange,
            accepted,
        }
    }

    /// Run the wrap as the coordinator, producing the hull.
    pub(crate) fn run_coordinator(self) -> Result<ConvexHull, HullError> {
        let mut acc = HullAccumulator::new(self.points.len());
        self.wrap(Some(&mut acc))?;
        Ok(acc.into_hull())
    }

    /// Run the wrap as a plain group member.
    pub(crate) fn run_member(self) -> Result<(), HullError> {
        self.wrap(None)
    }

    fn wrap(&self, mut hull: Option<&mut HullAccumulator>) -> Result<(), HullError> {
        let points = self.points;
        let n = points.len();

        // Startup reduction: agree on the global leftmost point. Smaller x
        // wins; exact ties resolve to the lower point index, making the
        // fold insensitive to slot order.
        let local = local_leftmost(points, self.range);
        let leftmost = self.exchange.reduce(self.rank, local, |best, cand| {
            if points[cand].x < points[best].x || (points[cand].x == points[best].x && cand < best)
            {
                cand
            } else {
                best
            }
        });

        // Coordinate duplicates of the starting vertex would otherwise seed
        // a degenerate edge in the first round; the starting vertex itself
        // stays unmarked so the closing scan can return to it.
        self.mark_value_duplicates(leftmost);

        let mut cur = leftmost;
        let mut rounds = 0;

        loop {
            // Capacity guard, run by every worker so a violation fails the
            // whole group in the same round: a correct hull accepts each
            // point at most once.
            if rounds >= n {
                return Err(HullError::CapacityExceeded {
                    accepted: rounds,
                    total: n,
                });
            }
            if let Some(acc) = hull.as_deref_mut() {
                acc.push(cur, points[cur]);
            }
            rounds += 1;

            // Per-iteration reduction: the most counter-clockwise candidate
            // relative to the edge leaving `cur` wins.
            let local = local_next(points, self.range, cur, self.accepted);
            let next = self.exchange.reduce(self.rank, local, |best, cand| {
                match orient(points[cur], points[best], points[cand]) {
                    Orientation::Left => cand,
                    _ => best,
                }
            });

            // A point cannot be its own successor.
            if next == cur {
                return Err(HullError::DegenerateInput { vertex: cur });
            }

            // Marking the same value from every worker is idempotent; the
            // next exchange round orders it before any dependent scan.
            // Coordinate duplicates of the winner are marked too: they can
            // never be legitimate hull vertices, and leaving one unmarked
            // would let it seed a degenerate edge later.
            self.accepted[next].store(true, Ordering::Relaxed);
            self.mark_value_duplicates(next);
            cur = next;

            if cur == leftmost {
                return Ok(());
            }
        }
    }

    /// Mark every point sharing the winner's exact coordinates, excluding
    /// the winner itself.
    ///
    /// Every worker runs this with the same winner, so each worker's own
    /// writes keep its marker view identical in content to every other
    /// worker's, independent of thread timing.
    fn mark_value_duplicates(&self, winner: usize) {
        let target = self.points[winner];
        for (j, p) in self.points.iter().enumerate() {
            if j != winner && *p == target {
                self.accepted[j].store(true, Ordering::Relaxed);
            }
        }
    }
}
