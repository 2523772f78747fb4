#![allow(dead_code)]

use planar_hull::Point2;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::f64::consts::TAU;

/// Generate random points uniformly distributed in the unit square.
pub fn random_square_points(n: usize, seed: u64) -> Vec<Point2> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n)
        .map(|_| Point2::new(rng.gen_range(0.0..1.0), rng.gen_range(0.0..1.0)))
        .collect()
}

/// Generate random points uniformly distributed in the unit disk.
pub fn random_disk_points(n: usize, seed: u64) -> Vec<Point2> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n)
        .map(|_| loop {
            let x: f64 = rng.gen_range(-1.0..1.0);
            let y: f64 = rng.gen_range(-1.0..1.0);
            if x * x + y * y <= 1.0 {
                break Point2::new(x, y);
            }
        })
        .collect()
}

/// Generate points on the unit circle in random angular order.
///
/// Every point is a hull vertex, which exercises the wrap's worst case of
/// one reduction round per point.
pub fn circle_points(n: usize, seed: u64) -> Vec<Point2> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let theta: f64 = rng.gen_range(0.0..TAU);
            Point2::new(theta.cos(), theta.sin())
        })
        .collect()
}

/// Generate n points on the line y = 2x (fully collinear, degenerate).
pub fn collinear_points(n: usize) -> Vec<Point2> {
    (0..n)
        .map(|i| Point2::new(i as f64, 2.0 * i as f64))
        .collect()
}

/// The unit square's four corners plus its center.
pub fn square_with_interior() -> Vec<Point2> {
    vec![
        Point2::new(0.0, 0.0),
        Point2::new(0.0, 1.0),
        Point2::new(1.0, 1.0),
        Point2::new(1.0, 0.0),
        Point2::new(0.5, 0.5),
    ]
}
