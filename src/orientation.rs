//! Orientation predicate for ordered point triples.
//!
//! This is the geometric foundation of the wrap: both the per-iteration
//! "more counter-clockwise" test and all validation checks reduce to the
//! sign of one 2D cross product.

use glam::DVec2;

/// Classification of the turn formed by an ordered point triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Counter-clockwise turn (positive cross product).
    Left,
    /// Clockwise turn (negative cross product).
    Right,
    /// Cross product exactly zero, including repeated points.
    Collinear,
}

/// Classify the turn `p0 -> p1 -> p2` by the sign of `(p1 - p0) x (p2 - p0)`.
///
/// Returns `Collinear` whenever the cross product is exactly zero, which
/// also covers the degenerate triples `p0 == p1`, `p1 == p2` and
/// `p0 == p1 == p2`. Callers must treat `Collinear` as "does not improve
/// the current candidate", never as an error. Pure and total for any
/// finite-coordinate inputs; no epsilon is applied.
#[inline]
pub fn orient(p0: DVec2, p1: DVec2, p2: DVec2) -> Orientation {
    let cross = (p1 - p0).perp_dot(p2 - p0);
    if cross > 0.0 {
        Orientation::Left
    } else if cross < 0.0 {
        Orientation::Right
    } else {
        Orientation::Collinear
    }
}
