//! Plain-text point lists (`.xyz`) and line meshes (`.obj`).
//!
//! An xyz file starts with a point count, followed by one point per line
//! given as whitespace separated coordinates. Only x and y are used.
//!
//! ```text
//! 3
//! 0.0 0.0 0
//! 1.0 0.0 0
//! 0.0 1.0 0
//! ```
//!
//! The obj output lists the polygon vertices, then its edges as pairs of
//! 1-based vertex indices, closing the loop with an edge back to vertex 1.
use std::io::{BufRead, Write};

use crate::data::{Point, Polygon};

#[derive(Debug)]
pub enum ReadError {
  Io(std::io::Error),
  /// Malformed input on the given 1-based line.
  Parse { line: usize, message: String },
}

impl std::fmt::Display for ReadError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    match self {
      ReadError::Io(err) => write!(f, "{}", err),
      ReadError::Parse { line, message } => write!(f, "line {}: {}", line, message),
    }
  }
}

impl std::error::Error for ReadError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      ReadError::Io(err) => Some(err),
      ReadError::Parse { .. } => None,
    }
  }
}

impl From<std::io::Error> for ReadError {
  fn from(err: std::io::Error) -> ReadError {
    ReadError::Io(err)
  }
}

fn parse_error(line: usize, message: impl Into<String>) -> ReadError {
  ReadError::Parse {
    line,
    message: message.into(),
  }
}

/// Read an xyz point list.
///
/// The leading count is advisory. A mismatch with the number of points
/// actually read is logged, not rejected. Blank lines are skipped.
pub fn read_xyz<R: BufRead>(reader: R) -> Result<Vec<Point>, ReadError> {
  let mut declared: Option<usize> = None;
  let mut points = Vec::new();
  for (idx, line) in reader.lines().enumerate() {
    let line = line?;
    let line_no = idx + 1;
    let trimmed = line.trim();
    if trimmed.is_empty() {
      continue;
    }
    match declared {
      None => {
        let count = trimmed
          .parse::<usize>()
          .map_err(|err| parse_error(line_no, format!("invalid point count {:?}: {}", trimmed, err)))?;
        declared = Some(count);
      }
      Some(_) => points.push(parse_coordinates(trimmed.split_whitespace(), line_no)?),
    }
  }
  if let Some(count) = declared {
    if count != points.len() {
      tracing::warn!(declared = count, read = points.len(), "point count mismatch");
    }
  }
  tracing::debug!(points = points.len(), "read xyz");
  Ok(points)
}

/// Read the vertices of an obj line mesh in the order they are written.
///
/// Lines other than `v` records (edges, comments, normals) are ignored.
pub fn read_obj<R: BufRead>(reader: R) -> Result<Vec<Point>, ReadError> {
  let mut vertices = Vec::new();
  for (idx, line) in reader.lines().enumerate() {
    let line = line?;
    let mut tokens = line.split_whitespace();
    if tokens.next() == Some("v") {
      vertices.push(parse_coordinates(tokens, idx + 1)?);
    }
  }
  tracing::debug!(vertices = vertices.len(), "read obj");
  Ok(vertices)
}

fn parse_coordinates<'a, I>(mut tokens: I, line: usize) -> Result<Point, ReadError>
where
  I: Iterator<Item = &'a str>,
{
  let mut coordinate = |axis: &str| -> Result<f64, ReadError> {
    let token = tokens
      .next()
      .ok_or_else(|| parse_error(line, format!("missing {} coordinate", axis)))?;
    token
      .parse::<f64>()
      .map_err(|err| parse_error(line, format!("invalid {} coordinate {:?}: {}", axis, token, err)))
  };
  let x = coordinate("x")?;
  let y = coordinate("y")?;
  Ok(Point::new([x, y]))
}

/// Write a polygon as an obj line mesh: `v x y 0` per vertex, then
/// `l i j` per edge.
pub fn write_obj<W: Write>(mut writer: W, polygon: &Polygon) -> std::io::Result<()> {
  for pt in polygon.iter() {
    writeln!(writer, "v {:.6} {:.6} 0", pt.x_coord(), pt.y_coord())?;
  }
  let n = polygon.len();
  for i in 1..=n {
    writeln!(writer, "l {} {}", i, i % n + 1)?;
  }
  writeln!(writer)?;
  Ok(())
}

/// Write an xyz point list that [`read_xyz`] reads back.
pub fn write_xyz<W: Write>(mut writer: W, points: &[Point]) -> std::io::Result<()> {
  writeln!(writer, "{}", points.len())?;
  for pt in points {
    writeln!(writer, "{:.6} {:.6} 0", pt.x_coord(), pt.y_coord())?;
  }
  writeln!(writer)?;
  Ok(())
}
