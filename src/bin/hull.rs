use anyhow::{Context, Result};
use clap::Parser;
use hullcast::algorithms::convex_hull;
use hullcast::io;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "hull")]
#[command(about = "Compute the convex hull of a point list")]
struct Cmd {
  /// Input point list (.xyz)
  points: PathBuf,
  /// Output line mesh (.obj)
  output: PathBuf,
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
  tracing::info!(points = points.len(), input = %cmd.points.display(), "loaded");

  let hull = convex_hull(points).context("building convex hull")?;
  tracing::info!(vertices = hull.len(), "hull");

  let file = File::create(&cmd.output)
    .with_context(|| format!("creating {}", cmd.output.display()))?;
  let mut out = BufWriter::new(file);
  io::write_obj(&mut out, &hull)
    .and_then(|()| out.flush())
    .with_context(|| format!("writing {}", cmd.output.display()))?;
  Ok(())
}
