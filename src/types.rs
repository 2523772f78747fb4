//! Core types for planar convex hull computation.

use bytemuck::{Pod, Zeroable};
use glam::DVec2;

/// A point in the plane, stored as two `f64` coordinates.
///
/// This type provides a small `#[repr(C)]` representation with a stable
/// layout. Coordinates are expected to be finite; the crate compares them
/// exactly and applies no epsilon tolerance anywhere.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    /// Create a new point.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Create from any type implementing `Point2Like`.
    #[inline]
    pub fn from_like<P: Point2Like>(p: &P) -> Self {
        Self::new(p.x(), p.y())
    }

    /// Convert to a `glam::DVec2`.
    #[inline]
    pub fn to_dvec2(self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    /// Create from a `glam::DVec2`.
    #[inline]
    pub fn from_dvec2(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<[f64; 2]> for Point2 {
    #[inline]
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Point2> for [f64; 2] {
    #[inline]
    fn from(p: Point2) -> Self {
        [p.x, p.y]
    }
}

impl From<DVec2> for Point2 {
    #[inline]
    fn from(v: DVec2) -> Self {
        Self::from_dvec2(v)
    }
}

impl From<Point2> for DVec2 {
    #[inline]
    fn from(p: Point2) -> DVec2 {
        p.to_dvec2()
    }
}

/// Trait for types that can be used as input points.
///
/// This allows zero-copy input from various math libraries.
pub trait Point2Like {
    fn x(&self) -> f64;
    fn y(&self) -> f64;
}

impl Point2Like for Point2 {
    #[inline]
    fn x(&self) -> f64 {
        self.x
    }
    #[inline]
    fn y(&self) -> f64 {
        self.y
    }
}

impl Point2Like for [f64; 2] {
    #[inline]
    fn x(&self) -> f64 {
        self[0]
    }
    #[inline]
    fn y(&self) -> f64 {
        self[1]
    }
}

impl Point2Like for (f64, f64) {
    #[inline]
    fn x(&self) -> f64 {
        self.0
    }
    #[inline]
    fn y(&self) -> f64 {
        self.1
    }
}

impl Point2Like for DVec2 {
    #[inline]
    fn x(&self) -> f64 {
        self.x
    }
    #[inline]
    fn y(&self) -> f64 {
        self.y
    }
}
