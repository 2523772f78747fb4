//! Compute entry point for the worker-parallel wrap engine.

use std::sync::atomic::AtomicBool;
use std::thread;

use glam::DVec2;

use crate::{ConvexHull, HullError};

use super::exchange::CandidateExchange;
use super::timing::{Timer, WrapTimings};
use super::worker::Worker;

/// Compute the convex hull of `points` using a group of `workers` lockstep
/// threads.
///
/// The caller guarantees `points.len() > 2`. The result is fully
/// deterministic and independent of the worker count: the accepted vertex
/// sequence depends only on the point set.
pub(crate) fn compute_hull(points: &[DVec2], workers: usize) -> Result<ConvexHull, HullError> {
    debug_assert!(points.len() > 2);
    let workers = workers.max(1);
    let mut timings = WrapTimings::default();

    let t = Timer::start();
    let exchange = CandidateExchange::new(workers);
    let accepted: Vec<AtomicBool> = (0..points.len()).map(|_| AtomicBool::new(false)).collect();
    timings.setup = t.elapsed();

    let t = Timer::start();
    let hull = thread::scope(|s| {
        let handles: Vec<_> = (1..workers)
            .map(|rank| {
                let worker = Worker::new(rank, points, &exchange, &accepted);
                s.spawn(move || worker.run_member())
            })
            .collect();

        let coordinator = Worker::new(0, points, &exchange, &accepted);
        let hull = coordinator.run_coordinator();

        // Group members fail in the same round as the coordinator, with
        // the same error; a panic in any member is re-raised here.
        for handle in handles {
            match handle.join() {
                Ok(result) => result?,
                Err(panic) => std::panic::resume_unwind(panic),
            }
        }
        hull
    })?;
    timings.wrap = t.elapsed();

    timings.report(workers, hull.num_vertices());
    Ok(hull)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dvec(points: &[(f64, f64)]) -> Vec<DVec2> {
        points.iter().map(|&(x, y)| DVec2::new(x, y)).collect()
    }

    #[test]
    fn test_square_multi_worker() {
        let points = dvec(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0), (0.5, 0.5)]);
        for workers in 1..=4 {
            let hull = compute_hull(&points, workers).unwrap();
            assert_eq!(hull.source_indices(), &[0, 1, 2, 3], "workers={}", workers);
        }
    }

    #[test]
    fn test_workers_exceed_points() {
        let points = dvec(&[(0.0, 0.0), (2.0, 0.0), (1.0, 2.0)]);
        let hull = compute_hull(&points, 16).unwrap();
        assert_eq!(hull.num_vertices(), 3);
    }

    #[test]
    fn test_zero_workers_clamped() {
        let points = dvec(&[(0.0, 0.0), (2.0, 0.0), (1.0, 2.0)]);
        let hull = compute_hull(&points, 0).unwrap();
        assert_eq!(hull.num_vertices(), 3);
    }
}
