//! Barrier-synchronized candidate exchange for the worker group.
//!
//! Each round every worker deposits one candidate index into its own slot,
//! the group crosses a barrier, the barrier leader folds all slots in rank
//! order into a single winner, and a second barrier publishes the winner
//! to everyone. The fold runs exactly once per round, so agreement never
//! depends on message arrival order or on which thread leads the barrier.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Barrier;

/// Group-wide all-gather-and-fold primitive.
///
/// The two `Barrier::wait` calls inside [`reduce`](Self::reduce) are the
/// only blocking points in the whole computation: every worker must
/// contribute before any worker observes the winner, and no worker starts
/// the next round before the winner is published. The barrier crossings
/// also order the slot stores and loads, so relaxed atomics suffice.
pub(crate) struct CandidateExchange {
    slots: Vec<AtomicUsize>,
    decided: AtomicUsize,
    barrier: Barrier,
}

impl CandidateExchange {
    pub(crate) fn new(size: usize) -> Self {
        Self {
            slots: (0..size).map(|_| AtomicUsize::new(0)).collect(),
            decided: AtomicUsize::new(0),
            barrier: Barrier::new(size),
        }
    }

    /// Number of workers in the group.
    #[inline]
    pub(crate) fn size(&self) -> usize {
        self.slots.len()
    }

    /// Contribute `candidate` and block until the group-wide winner is
    /// decided. Returns the same winner to every worker.
    ///
    /// `fold(winner, challenger)` must be deterministic; it is applied over
    /// the slots in rank order, seeded with rank 0's candidate.
    pub(crate) fn reduce<F>(&self, rank: usize, candidate: usize, fold: F) -> usize
    where
        F: Fn(usize, usize) -> usize,
    {
        self.slots[rank].store(candidate, Ordering::Relaxed);

        if self.barrier.wait().is_leader() {
            let mut winner = self.slots[0].load(Ordering::Relaxed);
            for slot in &self.slots[1..] {
                winner = fold(winner, slot.load(Ordering::Relaxed));
            }
            self.decided.store(winner, Ordering::Relaxed);
        }

        self.barrier.wait();
        self.decided.load(Ordering::Relaxed)
    }
}
