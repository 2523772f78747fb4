//! Planar convex hulls via worker-parallel gift wrapping.
//!
//! This crate computes the convex hull of a 2D point set with a
//! worker-parallel variant of the Gift Wrapping (Jarvis March) algorithm:
//! the point set is shared read-only across a fixed group of lockstep
//! worker threads, each worker searches only its slice of the index space,
//! and the group agrees on every next hull vertex through a
//! barrier-synchronized reduction until the polygon closes.
//!
//! The result is fully deterministic: for a fixed point set the hull is
//! identical for every worker count.
//!
//! # Example
//!
//! ```
//! use planar_hull::{compute, Point2};
//!
//! let points = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(0.0, 1.0),
//!     Point2::new(1.0, 1.0),
//!     Point2::new(1.0, 0.0),
//!     Point2::new(0.5, 0.5),
//! ];
//!
//! let hull = compute(&points).expect("computation should succeed");
//! assert_eq!(hull.num_vertices(), 4);
//! assert_eq!(hull.area(), 1.0);
//! assert_eq!(hull.perimeter(), 4.0);
//! ```

mod error;
mod hull;
mod orientation;
mod types;
pub mod validation;

// Internal engine
pub(crate) mod gift_wrap;

pub use error::HullError;
pub use hull::ConvexHull;
pub use orientation::{orient, Orientation};
pub use types::{Point2, Point2Like};

/// Configuration for hull computation.
#[derive(Debug, Clone)]
pub struct HullConfig {
    /// Number of worker threads in the group.
    ///
    /// The hull is identical for every worker count; this only trades
    /// thread overhead against per-round scan parallelism. Values above
    /// the point count leave the extra workers with empty slices, which
    /// is harmless. Zero is clamped to one.
    pub workers: usize,
}

impl Default for HullConfig {
    fn default() -> Self {
        Self {
            workers: std::thread::available_parallelism()
                .map(std::num::NonZeroUsize::get)
                .unwrap_or(1),
        }
    }
}

/// Compute a convex hull with default settings.
///
/// Requires at least 3 points. A fully collinear input terminates with a
/// degenerate zero-area hull that walks the collinear chain; see
/// [`ConvexHull::is_degenerate`].
pub fn compute<P: Point2Like>(points: &[P]) -> Result<ConvexHull, HullError> {
    compute_with(points, HullConfig::default())
}

/// Compute a convex hull with explicit configuration.
pub fn compute_with<P: Point2Like>(
    points: &[P],
    config: HullConfig,
) -> Result<ConvexHull, HullError> {
    use glam::DVec2;

    if points.len() < 3 {
        return Err(HullError::InsufficientPoints(points.len()));
    }

    // Convert input points once; the engine shares this buffer read-only
    // across the worker group.
    let dvec_points: Vec<DVec2> = points.iter().map(|p| DVec2::new(p.x(), p.y())).collect();

    gift_wrap::compute_hull(&dvec_points, config.workers)
}
