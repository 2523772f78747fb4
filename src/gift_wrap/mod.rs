//! Worker-parallel gift wrapping engine.
//!
//! The point set is shared read-only across a fixed group of lockstep
//! worker threads. Each round, every worker scans only its own slice of
//! the index space for the best next-vertex candidate, and the group
//! agrees on the winner through a barrier-synchronized exchange-and-fold.
//! The coordinator (rank 0) accumulates agreed vertices until the wrap
//! returns to the starting point.

mod compute;
mod exchange;
mod partition;
mod search;
mod timing;
mod worker;

pub(crate) use compute::compute_hull;
