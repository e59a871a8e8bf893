//! Evolute splice demo: fits curves onto a point path and prints the result.
//!
//! Usage:
//! ```text
//! cargo run --example splice                         # built-in seven-point path
//! cargo run --example splice -- points.txt           # path from file, splice (2, len-2)
//! cargo run --example splice -- points.txt 1 4       # explicit splice range
//! ```
//!
//! Output is plain `x y` text, one point per line, in three blocks separated
//! by blank lines: the spiral-spliced path, the deltoid arc, then the fitted
//! circle.

use std::fs::File;
use std::io::{BufReader, Write};

use evolute::geometry::Polyline;
use evolute::io::{parse_index, read_points};
use evolute::math::Point2;
use evolute::operations::fitting::{EvoluteArc, SpiralSplice};
use evolute::operations::SamplingParams;
use evolute::Result;

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for evolute and this demo.
    // Override with RUST_LOG env var (e.g. RUST_LOG=evolute=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("splice=info".parse().unwrap_or_default())
        .add_directive("evolute=info".parse().unwrap_or_default());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let path = match args.first() {
        Some(file) => read_points(BufReader::new(File::open(file)?))?,
        None => Polyline::from_xy(&[
            (0.0, 0.0),
            (1.0, 1.5),
            (2.0, 3.0),
            (3.0, 5.0),
            (4.0, 3.5),
            (5.0, 2.0),
            (6.0, 1.0),
        ]),
    };
    let (start, end) = splice_range(&args, path.len())?;
    tracing::info!(points = path.len(), start, end, "loaded path");

    let params = SamplingParams::default();
    let spliced = SpiralSplice::new(&path, start, end)
        .with_params(params)
        .execute()?;
    let arc = EvoluteArc::new(&path).with_params(params).execute()?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_points(&mut out, &spliced.points)?;
    writeln!(out)?;
    write_points(&mut out, arc.segment.points())?;
    writeln!(out)?;
    write_points(&mut out, arc.circle.sample(100)?.points())?;
    Ok(())
}

/// Splice range from `args[1..3]`, or `(2, len - 2)` by default.
fn splice_range(args: &[String], len: usize) -> Result<(usize, usize)> {
    match (args.get(1), args.get(2)) {
        (Some(a), Some(b)) => Ok((parse_index(a)?, parse_index(b)?)),
        _ => Ok((2, len.saturating_sub(2))),
    }
}

fn write_points(out: &mut impl Write, points: &[Point2]) -> Result<()> {
    for p in points {
        writeln!(out, "{} {}", p.x, p.y)?;
    }
    Ok(())
}
