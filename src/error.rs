//! Error types for convex hull computation.

use std::fmt;

/// Errors that can occur during convex hull computation.
///
/// Every variant is unrecoverable: each indicates a precondition or logic
/// defect, not a transient failure, so there is no retry path and no
/// partial hull is ever returned. All workers in a group detect the same
/// condition in the same round, so a failure tears the whole group down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HullError {
    /// Fewer than 3 input points. A hull of fewer points is undefined.
    InsufficientPoints(usize),

    /// A reduction round selected the current vertex as its own successor.
    /// This indicates a point set whose distinct coordinates admit no wrap
    /// step (for example, every point identical), or a partitioning bug.
    DegenerateInput {
        /// The hull vertex index whose successor search failed.
        vertex: usize,
    },

    /// The wrap failed to close after accepting as many vertices as there
    /// are input points. A correct hull contains each point at most once,
    /// so this signals a cycle through already-accepted vertices.
    CapacityExceeded {
        /// Vertices accepted before the violation was detected.
        accepted: usize,
        /// Total input point count (the hull capacity).
        total: usize,
    },
}

impl fmt::Display for HullError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HullError::InsufficientPoints(n) => {
                write!(f, "insufficient points: need at least 3, got {}", n)
            }
            HullError::DegenerateInput { vertex } => {
                write!(
                    f,
                    "degenerate input: no successor for hull vertex at point index {}",
                    vertex
                )
            }
            HullError::CapacityExceeded { accepted, total } => {
                write!(
                    f,
                    "hull capacity exceeded: accepted {} vertices from {} points without closing",
                    accepted, total
                )
            }
        }
    }
}

impl std::error::Error for HullError {}
