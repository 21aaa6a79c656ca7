use anyhow::{Context, Result};
use clap::Parser;
use hullcast::algorithms::{RayCaster, DEDUP_TOLERANCE};
use hullcast::data::{Point, Polygon};
use hullcast::io;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "inside")]
#[command(about = "Keep the points that lie inside a polygon")]
struct Cmd {
  /// Query point list (.xyz)
  points: PathBuf,
  /// Polygon as written by `hull` (.obj)
  polygon: PathBuf,
  /// Output point list (.xyz)
  result: PathBuf,
  /// Crossings closer than this count as one
  #[arg(long, default_value_t = DEDUP_TOLERANCE)]
  tolerance: f64,
}

fn main() -> Result<()> {
  SubscriberBuilder::default()
    .with_target(false)
    .with_writer(std::io::stderr)
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .init();
  let cmd = Cmd::parse();

  let file = File::open(&cmd.points)
    .with_context(|| format!("opening {}", cmd.points.display()))?;
  let points = io::read_xyz(BufReader::new(file))
    .with_context(|| format!("reading {}", cmd.points.display()))?;

  let file = File::open(&cmd.polygon)
    .with_context(|| format!("opening {}", cmd.polygon.display()))?;
  let vertices = io::read_obj(BufReader::new(file))
    .with_context(|| format!("reading {}", cmd.polygon.display()))?;
  let polygon = Polygon::new(vertices)
    .with_context(|| format!("invalid polygon in {}", cmd.polygon.display()))?;
  tracing::info!(
    points = points.len(),
    vertices = polygon.len(),
    tolerance = cmd.tolerance,
    "loaded"
  );

  let caster = RayCaster::with_tolerance(cmd.tolerance);
  let inside: Vec<Point> = points
    .into_iter()
    .filter(|pt| caster.contains(&polygon, pt))
    .collect();
  tracing::info!(inside = inside.len(), "filtered");

  let file = File::create(&cmd.result)
    .with_context(|| format!("creating {}", cmd.result.display()))?;
  let mut out = BufWriter::new(file);
  io::write_xyz(&mut out, &inside)
    .and_then(|()| out.flush())
    .with_context(|| format!("writing {}", cmd.result.display()))?;
  Ok(())
}
