//! Geometric correctness tests for planar-hull.
//!
//! These tests verify the invariants that characterize a convex hull:
//! clockwise winding starting at the leftmost point, convexity, vertices
//! drawn from the input, and enclosure of every input point.

mod support;

use planar_hull::{compute, compute_with, validation, HullConfig, Point2};
use support::points::{circle_points, random_disk_points, random_square_points};

fn signed_shoelace_sum(vertices: &[Point2]) -> f64 {
    let n = vertices.len();
    let mut sum = 0.0;
    for i in 0..n {
        let a = vertices[i];
        let b = vertices[(i + 1) % n];
        sum += a.x * b.y - b.x * a.y;
    }
    sum
}

#[test]
fn test_winding_is_clockwise() {
    for seed in [1, 2, 3] {
        let points = random_disk_points(200, seed);
        let hull = compute(&points).unwrap();
        // Clockwise traversal has a negative signed area.
        assert!(
            signed_shoelace_sum(hull.vertices()) < 0.0,
            "hull not clockwise for seed {}",
            seed
        );
    }
}

#[test]
fn test_starts_at_leftmost_point() {
    for seed in [7, 8, 9] {
        let points = random_square_points(150, seed);
        let hull = compute(&points).unwrap();

        let mut leftmost = 0;
        for (i, p) in points.iter().enumerate() {
            if p.x < points[leftmost].x {
                leftmost = i;
            }
        }
        assert_eq!(hull.source_indices()[0] as usize, leftmost);
    }
}

#[test]
fn test_vertices_come_from_input() {
    let points = random_disk_points(300, 31337);
    let hull = compute(&points).unwrap();

    for (v, &idx) in hull.vertices().iter().zip(hull.source_indices()) {
        assert_eq!(*v, points[idx as usize], "vertex does not match its source");
    }
}

#[test]
fn test_all_points_enclosed() {
    for seed in [100, 200, 300] {
        let points = random_square_points(1000, seed);
        let hull = compute(&points).unwrap();
        let report = validation::validate(&hull, &points);
        assert_eq!(report.points_outside, 0, "seed {}: {}", seed, report);
        assert!(report.is_valid(), "seed {}: {}", seed, report);
    }
}

#[test]
fn test_random_clouds_strictly_convex() {
    // Random f64 clouds have no exactly collinear triples in practice.
    let points = random_disk_points(500, 4242);
    let hull = compute(&points).unwrap();
    let report = validation::validate(&hull, &points);
    assert!(report.is_strictly_convex(), "{}", report);
}

#[test]
fn test_circle_points_all_on_hull() {
    // Every point of a circle is a hull vertex: one round per point.
    let n = 64;
    let points = circle_points(n, 55555);
    let hull = compute(&points).unwrap();
    assert_eq!(hull.num_vertices(), n);
    assert!(validation::validate(&hull, &points).is_valid());
}

#[test]
fn test_idempotent_across_worker_counts() {
    let points = random_disk_points(4000, 2024);
    let reference = compute_with(&points, HullConfig { workers: 1 }).unwrap();

    for workers in [2, 4, 7, 16] {
        let hull = compute_with(&points, HullConfig { workers }).unwrap();
        assert_eq!(hull, reference, "hull differs at workers={}", workers);
    }
}

#[test]
fn test_repeated_runs_are_identical() {
    let points = random_square_points(800, 909);
    let first = compute(&points).unwrap();
    for _ in 0..3 {
        assert_eq!(compute(&points).unwrap(), first);
    }
}

#[test]
fn test_lattice_boundary() {
    // A 3x3 integer lattice: collinear boundary points may or may not be
    // kept as vertices, but the polygon must still be the outer square.
    let points: Vec<Point2> = (0..3)
        .flat_map(|i| (0..3).map(move |j| Point2::new(i as f64, j as f64)))
        .collect();
    let hull = compute(&points).unwrap();
    let report = validation::validate(&hull, &points);
    assert!(report.is_valid(), "{}", report);
    assert_eq!(hull.area(), 4.0);
    assert_eq!(hull.perimeter(), 8.0);
}

#[test]
fn test_known_pentagon() {
    // A convex pentagon plus interior points; the hull must be exactly
    // the pentagon's corners.
    let corners = [
        Point2::new(-2.0, 0.0),
        Point2::new(-1.0, 2.0),
        Point2::new(1.5, 1.5),
        Point2::new(2.0, -0.5),
        Point2::new(0.0, -2.0),
    ];
    let mut points: Vec<Point2> = corners.to_vec();
    points.push(Point2::new(0.0, 0.0));
    points.push(Point2::new(0.5, 0.5));
    points.push(Point2::new(-0.5, -0.5));

    let hull = compute(&points).unwrap();
    assert_eq!(hull.num_vertices(), 5);
    for v in hull.vertices() {
        assert!(corners.contains(v), "unexpected hull vertex {:?}", v);
    }
}
