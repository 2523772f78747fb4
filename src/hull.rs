//! Convex hull storage, access and derived metrics.

use glam::DVec2;

use crate::Point2;

/// A convex hull of a planar point set.
///
/// Vertices are stored in clockwise traversal order starting from the
/// point with the smallest x coordinate (ties broken toward the lower
/// input index). Each vertex also carries the index of the input point
/// it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvexHull {
    vertices: Vec<Point2>,
    source_indices: Vec<u32>,
}

impl ConvexHull {
    /// Create a hull from raw parts.
    ///
    /// This is used by the computation engine to construct the final hull.
    pub(crate) fn from_parts(vertices: Vec<Point2>, source_indices: Vec<u32>) -> Self {
        debug_assert_eq!(vertices.len(), source_indices.len());
        Self {
            vertices,
            source_indices,
        }
    }

    /// Number of hull vertices.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Get a vertex by position along the hull boundary.
    #[inline]
    pub fn vertex(&self, index: usize) -> Point2 {
        self.vertices[index]
    }

    /// All vertices, in clockwise order.
    #[inline]
    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }

    /// For each vertex, the index of the input point it came from.
    #[inline]
    pub fn source_indices(&self) -> &[u32] {
        &self.source_indices
    }

    /// Iterate over the directed boundary edges, wrap-around included.
    pub fn iter_edges(&self) -> impl Iterator<Item = (Point2, Point2)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Polygon area via the shoelace formula (wrap-around included,
    /// halved and absolute-valued).
    pub fn area(&self) -> f64 {
        let n = self.vertices.len();
        if n < 3 {
            return 0.0;
        }
        let mut sum = 0.0;
        for i in 0..n {
            let a = self.vertices[i];
            let b = self.vertices[(i + 1) % n];
            sum += a.x * b.y - b.x * a.y;
        }
        0.5 * sum.abs()
    }

    /// Polygon perimeter via summed Euclidean edge lengths
    /// (wrap-around included).
    pub fn perimeter(&self) -> f64 {
        let n = self.vertices.len();
        if n < 2 {
            return 0.0;
        }
        let mut length = 0.0;
        for i in 0..n {
            let a: DVec2 = self.vertices[i].into();
            let b: DVec2 = self.vertices[(i + 1) % n].into();
            length += a.distance(b);
        }
        length
    }

    /// Returns true for a zero-area hull (fully collinear input).
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.area() == 0.0
    }
}

/// Coordinator-only growing sequence of accepted hull vertices.
///
/// Capacity is bounded by the input point count; the controller enforces
/// the bound symmetrically across all workers before every append, so the
/// assertion here only backstops a controller bug.
pub(crate) struct HullAccumulator {
    vertices: Vec<Point2>,
    source_indices: Vec<u32>,
    capacity: usize,
}

impl HullAccumulator {
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(capacity),
            source_indices: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub(crate) fn push(&mut self, source_index: usize, p: DVec2) {
        debug_assert!(self.vertices.len() < self.capacity);
        self.vertices.push(Point2::from_dvec2(p));
        self.source_indices.push(source_index as u32);
    }

    pub(crate) fn into_hull(self) -> ConvexHull {
        ConvexHull::from_parts(self.vertices, self.source_indices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> ConvexHull {
        // Unit square in clockwise order starting from the origin.
        ConvexHull::from_parts(
            vec![
                Point2::new(0.0, 0.0),
                Point2::new(0.0, 1.0),
                Point2::new(1.0, 1.0),
                Point2::new(1.0, 0.0),
            ],
            vec![0, 1, 2, 3],
        )
    }

    #[test]
    fn test_square_metrics() {
        let hull = square();
        assert_eq!(hull.num_vertices(), 4);
        assert_eq!(hull.area(), 1.0);
        assert_eq!(hull.perimeter(), 4.0);
        assert!(!hull.is_degenerate());
    }

    #[test]
    fn test_edge_iteration_wraps() {
        let hull = square();
        let edges: Vec<_> = hull.iter_edges().collect();
        assert_eq!(edges.len(), 4);
        assert_eq!(edges[3], (Point2::new(1.0, 0.0), Point2::new(0.0, 0.0)));
    }

    #[test]
    fn test_degenerate_chain() {
        let hull = ConvexHull::from_parts(
            vec![
                Point2::new(0.0, 0.0),
                Point2::new(1.0, 0.0),
                Point2::new(2.0, 0.0),
            ],
            vec![0, 1, 2],
        );
        assert_eq!(hull.area(), 0.0);
        assert!(hull.is_degenerate());
        // Out and back along the chain.
        assert_eq!(hull.perimeter(), 4.0);
    }

    #[test]
    fn test_accumulator_round_trip() {
        let mut acc = HullAccumulator::new(4);
        acc.push(2, DVec2::new(0.0, 0.0));
        acc.push(0, DVec2::new(1.0, 2.0));
        let hull = acc.into_hull();
        assert_eq!(hull.num_vertices(), 2);
        assert_eq!(hull.source_indices(), &[2, 0]);
        assert_eq!(hull.vertex(1), Point2::new(1.0, 2.0));
    }
}
