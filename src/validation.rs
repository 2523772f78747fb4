//! Geometric validation for computed hulls.
//!
//! Provides functions to verify that a hull is a convex, clockwise polygon
//! enclosing its input points. Useful for debugging, testing, and catching
//! numerical issues.

use glam::DVec2;
use rustc_hash::FxHashSet;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::orientation::{orient, Orientation};
use crate::{ConvexHull, Point2};

/// Detailed validation report for a convex hull.
#[derive(Debug, Clone)]
pub struct HullReport {
    /// Number of hull vertices.
    pub num_vertices: usize,
    /// Input indices that appear more than once in the hull.
    pub duplicate_vertices: usize,
    /// Consecutive vertex triples turning left (a clockwise hull must
    /// never turn left).
    pub reflex_vertices: usize,
    /// Consecutive vertex triples that are exactly collinear.
    pub collinear_vertices: usize,
    /// Input points lying strictly outside the hull boundary.
    pub points_outside: usize,
    /// Whether the hull starts at the input's leftmost point (ties broken
    /// toward the lower index).
    pub starts_at_leftmost: bool,
    /// Polygon area (shoelace).
    pub area: f64,
    /// Polygon perimeter.
    pub perimeter: f64,
}

impl HullReport {
    /// Check that the hull is a convex clockwise polygon enclosing every
    /// input point. Collinear triples are tolerated (degenerate but not
    /// incorrect for inputs with collinear boundary points).
    pub fn is_valid(&self) -> bool {
        self.num_vertices >= 3
            && self.duplicate_vertices == 0
            && self.reflex_vertices == 0
            && self.points_outside == 0
            && self.starts_at_leftmost
    }

    /// Strict check: valid and no collinear boundary triples.
    pub fn is_strictly_convex(&self) -> bool {
        self.is_valid() && self.collinear_vertices == 0
    }

    /// Format a summary of any issues found.
    pub fn summary(&self) -> String {
        if self.is_strictly_convex() {
            return "Perfect".to_string();
        }

        let mut issues = Vec::new();

        if self.num_vertices < 3 {
            issues.push(format!("only {} vertices", self.num_vertices));
        }
        if self.duplicate_vertices > 0 {
            issues.push(format!("{} duplicate vertices", self.duplicate_vertices));
        }
        if self.reflex_vertices > 0 {
            issues.push(format!("{} reflex vertices", self.reflex_vertices));
        }
        if self.collinear_vertices > 0 {
            issues.push(format!("{} collinear triples", self.collinear_vertices));
        }
        if self.points_outside > 0 {
            issues.push(format!("{} points outside", self.points_outside));
        }
        if !self.starts_at_leftmost {
            issues.push("does not start at leftmost point".to_string());
        }

        if issues.is_empty() {
            "Valid (collinear boundary points)".to_string()
        } else {
            issues.join(", ")
        }
    }
}

impl std::fmt::Display for HullReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "HullReport {{ V={}, area={}, perimeter={}, {} }}",
            self.num_vertices,
            self.area,
            self.perimeter,
            self.summary()
        )
    }
}

/// Validate a computed hull against the point set it was computed from.
///
/// Checks:
/// - no input index appears twice among the vertices
/// - clockwise winding with no reflex corner
/// - the boundary starts at the leftmost input point
/// - every input point lies inside or on the boundary
pub fn validate(hull: &ConvexHull, points: &[Point2]) -> HullReport {
    let n = hull.num_vertices();
    let verts: Vec<DVec2> = hull.vertices().iter().map(|p| p.to_dvec2()).collect();

    let mut seen: FxHashSet<u32> = FxHashSet::default();
    let duplicate_vertices = hull
        .source_indices()
        .iter()
        .filter(|&&idx| !seen.insert(idx))
        .count();

    let mut reflex_vertices = 0;
    let mut collinear_vertices = 0;
    if n >= 3 {
        for i in 0..n {
            let triple = orient(verts[i], verts[(i + 1) % n], verts[(i + 2) % n]);
            match triple {
                Orientation::Left => reflex_vertices += 1,
                Orientation::Collinear => collinear_vertices += 1,
                Orientation::Right => {}
            }
        }
    }

    // A point is outside a clockwise hull iff it lies strictly to the left
    // of some directed boundary edge.
    let edges: Vec<(DVec2, DVec2)> = (0..n).map(|i| (verts[i], verts[(i + 1) % n])).collect();
    let is_outside = |q: &Point2| {
        let q = q.to_dvec2();
        edges
            .iter()
            .any(|&(a, b)| orient(a, b, q) == Orientation::Left)
    };

    #[cfg(feature = "parallel")]
    let points_outside = points.par_iter().filter(|q| is_outside(q)).count();
    #[cfg(not(feature = "parallel"))]
    let points_outside = points.iter().filter(|q| is_outside(q)).count();

    let starts_at_leftmost = match hull.source_indices().first() {
        Some(&first) => {
            let mut leftmost = 0;
            for (i, p) in points.iter().enumerate() {
                if p.x < points[leftmost].x {
                    leftmost = i;
                }
            }
            first as usize == leftmost
        }
        None => false,
    };

    HullReport {
        num_vertices: n,
        duplicate_vertices,
        reflex_vertices,
        collinear_vertices,
        points_outside,
        starts_at_leftmost,
        area: hull.area(),
        perimeter: hull.perimeter(),
    }
}
