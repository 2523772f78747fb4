//! Compute the convex hull of a 2D point set read from a text file.
//!
//! Input format: first line is the dimension (must be 2), second line is
//! the point count, then one `x y` pair per line. The hull is written as
//! the dimension, the vertex count plus one, and the vertices in clockwise
//! order with the first vertex repeated, so the output plots as a closed
//! polygon.
//!
//! Usage:
//!   hull < points.in > points.hull
//!   hull points.in -o points.hull -w 4 --validate

use clap::Parser;
use planar_hull::{compute_with, validation, HullConfig, Point2};
use std::fs;
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "hull", about = "2D convex hull via worker-parallel gift wrapping")]
struct Args {
    /// Point set file; reads stdin when omitted.
    input: Option<PathBuf>,

    /// Hull output file; writes stdout when omitted.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Worker thread count (defaults to available parallelism).
    #[arg(short, long)]
    workers: Option<usize>,

    /// Validate the computed hull and print a report to stderr.
    #[arg(long)]
    validate: bool,
}

fn main() {
    if let Err(e) = run(Args::parse()) {
        eprintln!("FATAL: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let text = match &args.input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    let points = parse_points(&text)?;

    let mut config = HullConfig::default();
    if let Some(workers) = args.workers {
        config.workers = workers;
    }

    let start = Instant::now();
    let hull = compute_with(&points, config)?;
    let elapsed = start.elapsed();

    eprintln!();
    eprintln!("Convex hull of {} points in 2-d:", points.len());
    eprintln!();
    eprintln!("  Number of vertices: {}", hull.num_vertices());
    eprintln!("  Total facet area: {:.6}", hull.perimeter());
    eprintln!("  Total volume: {:.6}", hull.area());
    eprintln!();
    eprintln!("Elapsed time: {:.6}", elapsed.as_secs_f64());

    if args.validate {
        let report = validation::validate(&hull, &points);
        eprintln!("{}", report);
    }

    match &args.output {
        Some(path) => {
            let file = fs::File::create(path)?;
            write_hull(&mut BufWriter::new(file), &hull)?;
        }
        None => {
            let stdout = io::stdout();
            write_hull(&mut stdout.lock(), &hull)?;
        }
    }
    Ok(())
}

fn parse_points(text: &str) -> Result<Vec<Point2>, String> {
    let mut tokens = text.split_whitespace();
    let mut next_token = |what: &str| {
        tokens
            .next()
            .ok_or_else(|| format!("can not read {}", what))
    };

    let dim: u32 = next_token("dimension")?
        .parse()
        .map_err(|e| format!("bad dimension: {}", e))?;
    if dim != 2 {
        return Err(format!(
            "this program supports dimension 2 only (got dimension {} instead)",
            dim
        ));
    }

    let count: usize = next_token("number of points")?
        .parse()
        .map_err(|e| format!("bad point count: {}", e))?;

    let mut points = Vec::with_capacity(count);
    for i in 0..count {
        let x: f64 = next_token("point coordinate")?
            .parse()
            .map_err(|e| format!("failed to get coordinates of point {}: {}", i, e))?;
        let y: f64 = next_token("point coordinate")?
            .parse()
            .map_err(|e| format!("failed to get coordinates of point {}: {}", i, e))?;
        points.push(Point2::new(x, y));
    }
    Ok(points)
}

fn write_hull<W: Write>(w: &mut W, hull: &planar_hull::ConvexHull) -> io::Result<()> {
    writeln!(w, "2")?;
    writeln!(w, "{}", hull.num_vertices() + 1)?;
    for v in hull.vertices() {
        writeln!(w, "{:.6} {:.6}", v.x, v.y)?;
    }
    // Repeat the first vertex to close the polygon.
    let first = hull.vertex(0);
    writeln!(w, "{:.6} {:.6}", first.x, first.y)?;
    Ok(())
}
