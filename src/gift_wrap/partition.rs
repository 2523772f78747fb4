//! Deterministic size-based partitioning of the point index space.

use std::ops::Range;

/// Contiguous half-open slice `[start, end)` of the global point index
/// space owned by one worker. May be empty when there are more workers
/// than points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct WorkerRange {
    pub start: usize,
    pub end: usize,
}

impl WorkerRange {
    #[inline]
    pub(crate) fn indices(self) -> Range<usize> {
        self.start..self.end
    }

    #[inline]
    pub(crate) fn is_empty(self) -> bool {
        self.start >= self.end
    }

    #[inline]
    pub(crate) fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }
}

/// Compute the slice of `[0, n)` owned by `rank` out of `size` workers.
///
/// Uses the exact integer-division split `[rank*n/size, (rank+1)*n/size)`
/// so that every worker reproduces the same global partition locally,
/// without exchanging range boundaries. The ranges cover `[0, n)` with no
/// gap and no overlap.
#[inline]
pub(crate) fn worker_range(rank: usize, size: usize, n: usize) -> WorkerRange {
    debug_assert!(rank < size);
    WorkerRange {
        start: rank * n / size,
        end: (rank + 1) * n / size,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_worker_owns_everything() {
        let r = worker_range(0, 1, 17);
        assert_eq!(r, WorkerRange { start: 0, end: 17 });
        assert_eq!(r.len(), 17);
    }

    #[test]
    fn test_even_split() {
        assert_eq!(worker_range(0, 4, 8), WorkerRange { start: 0, end: 2 });
        assert_eq!(worker_range(3, 4, 8), WorkerRange { start: 6, end: 8 });
    }

    #[test]
    fn test_more_workers_than_points() {
        // Some ranges must be empty, but the cover property still holds.
        let n = 3;
        let size = 8;
        let empty = (0..size)
            .map(|rank| worker_range(rank, size, n))
            .filter(|r| r.is_empty())
            .count();
        assert_eq!(empty, size - n);
    }

    #[test]
    fn test_partition_covers_exactly() {
        // Ranges partition [0, n) exactly: no gaps, no overlap.
        for n in 1..64 {
            for size in 1..=12 {
                let mut next_expected = 0;
                for rank in 0..size {
                    let r = worker_range(rank, size, n);
                    assert_eq!(
                        r.start, next_expected,
                        "gap or overlap at n={} size={} rank={}",
                        n, size, rank
                    );
                    assert!(r.end >= r.start);
                    next_expected = r.end;
                }
                assert_eq!(next_expected, n, "cover incomplete at n={} size={}", n, size);
            }
        }
    }
}
