//! Benchmark planar-hull at large scales.
//!
//! Run with: cargo run --release --bin bench_hull
//!
//! Usage:
//!   bench_hull                 Run default size (1m)
//!   bench_hull 100k 1m 10m     Run multiple sizes
//!   bench_hull -w 1 -w 4 -w 8  Compare worker counts
//!   bench_hull --circle        Points on a circle (every point on the hull)
//!
//! For engine phase timing, build with: cargo run --release --features timing --bin bench_hull

use clap::Parser;
use planar_hull::{compute_with, HullConfig, Point2};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::Instant;

fn parse_count(s: &str) -> Result<usize, String> {
    let s = s.to_lowercase();
    let (num_str, multiplier) = if s.ends_with('m') {
        (&s[..s.len() - 1], 1_000_000)
    } else if s.ends_with('k') {
        (&s[..s.len() - 1], 1_000)
    } else {
        (s.as_str(), 1)
    };

    num_str
        .parse::<f64>()
        .map(|n| (n * multiplier as f64) as usize)
        .map_err(|e| format!("Invalid number '{}': {}", s, e))
}

#[derive(Parser)]
#[command(name = "bench_hull", about = "Benchmark worker-parallel gift wrapping")]
struct Args {
    /// Point counts to benchmark (supports k/m suffixes).
    #[arg(value_parser = parse_count)]
    sizes: Vec<usize>,

    /// Worker counts to compare (repeatable).
    #[arg(short, long)]
    workers: Vec<usize>,

    /// Iterations per configuration; the best time is reported.
    #[arg(short = 'n', long, default_value_t = 3)]
    iters: usize,

    /// RNG seed for point generation.
    #[arg(long, default_value_t = 12345)]
    seed: u64,

    /// Place points on a circle so every point is a hull vertex
    /// (worst case for the wrap: one round per point).
    #[arg(long)]
    circle: bool,
}

fn random_square_points<R: Rng>(n: usize, rng: &mut R) -> Vec<Point2> {
    (0..n)
        .map(|_| Point2::new(rng.gen_range(0.0..1.0), rng.gen_range(0.0..1.0)))
        .collect()
}

fn circle_points<R: Rng>(n: usize, rng: &mut R) -> Vec<Point2> {
    use std::f64::consts::TAU;
    (0..n)
        .map(|_| {
            let theta: f64 = rng.gen_range(0.0..TAU);
            Point2::new(theta.cos(), theta.sin())
        })
        .collect()
}

fn main() {
    let args = Args::parse();

    let sizes = if args.sizes.is_empty() {
        vec![1_000_000]
    } else {
        args.sizes.clone()
    };
    let worker_counts = if args.workers.is_empty() {
        let available = std::thread::available_parallelism()
            .map(std::num::NonZeroUsize::get)
            .unwrap_or(1);
        vec![1, available]
    } else {
        args.workers.clone()
    };

    for &n in &sizes {
        let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
        let points = if args.circle {
            circle_points(n, &mut rng)
        } else {
            random_square_points(n, &mut rng)
        };

        println!("n = {}", n);
        for &workers in &worker_counts {
            let mut best = f64::INFINITY;
            let mut vertices = 0;
            for _ in 0..args.iters.max(1) {
                let start = Instant::now();
                let hull = compute_with(&points, HullConfig { workers })
                    .expect("benchmark input should always produce a hull");
                let elapsed = start.elapsed().as_secs_f64();
                best = best.min(elapsed);
                vertices = hull.num_vertices();
            }
            println!(
                "  workers {:>3}: {:>10.3} ms  ({} hull vertices)",
                workers,
                best * 1e3,
                vertices
            );
        }
    }
}
