use std::ops::Deref;

use crate::data::Point;
use crate::data::PointLocation;
use crate::{Error, Orientation, PolygonScalar};

use super::Polygon;

/// Strictly convex polygon with counter-clockwise vertex order.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonConvex<T = f64>(Polygon<T>);

///////////////////////////////////////////////////////////////////////////////
// PolygonConvex

impl<T> PolygonConvex<T>
where
  T: PolygonScalar,
{
  /// $O(1)$ Assume that a polygon is convex.
  ///
  /// The input polygon has to be strictly convex and counter-clockwise, ie. no
  /// vertices are allowed to be concave or colinear. Use [`PolygonConvex::validate`]
  /// to check.
  pub fn new_unchecked(poly: Polygon<T>) -> PolygonConvex<T> {
    PolygonConvex(poly)
  }

  /// $O(n)$
  pub fn new(poly: Polygon<T>) -> Result<PolygonConvex<T>, Error> {
    let convex = PolygonConvex(poly);
    convex.validate()?;
    Ok(convex)
  }

  /// $O(\log n)$ Locate a point relative to the polygon.
  pub fn locate(&self, pt: &Point<T>) -> PointLocation {
    use Orientation::*;
    let vertices = &self.0.vertices;
    let n = vertices.len();
    let p0 = &vertices[0];
    // Binary search for the fan triangle (p0, v[lower], v[upper]) around pt.
    let mut lower = 1;
    let mut upper = n - 1;
    while lower + 1 < upper {
      let middle = (lower + upper) / 2;
      if p0.orientation(&vertices[middle], pt) == CounterClockWise {
        lower = middle;
      } else {
        upper = middle;
      }
    }
    let p1 = &vertices[lower];
    let p2 = &vertices[upper];
    let ab = p0.orientation(p1, pt);
    let bc = p1.orientation(p2, pt);
    let ca = p2.orientation(p0, pt);
    if ab == ClockWise || bc == ClockWise || ca == ClockWise {
      return PointLocation::Outside;
    }
    // Only fan edges that are also polygon edges count as boundary.
    let on_boundary = bc == CoLinear
      || (lower == 1 && ab == CoLinear)
      || (upper == n - 1 && ca == CoLinear);
    if on_boundary {
      PointLocation::OnBoundary
    } else {
      PointLocation::Inside
    }
  }

  /// $O(n)$
  pub fn validate(&self) -> Result<(), Error> {
    self.0.validate()?;
    let vertices = &self.0.vertices;
    let n = vertices.len();
    for i in 0..n {
      let prev = &vertices[(i + n - 1) % n];
      let next = &vertices[(i + 1) % n];
      if prev.orientation(&vertices[i], next) != Orientation::CounterClockWise {
        return Err(Error::ConvexViolation);
      }
    }
    Ok(())
  }

  /// $O(1)$
  pub fn polygon(&self) -> &Polygon<T> {
    &self.0
  }

  pub fn into_inner(self) -> Polygon<T> {
    self.0
  }
}

impl<T> Deref for PolygonConvex<T> {
  type Target = Polygon<T>;
  fn deref(&self) -> &Polygon<T> {
    &self.0
  }
}

impl<T> From<PolygonConvex<T>> for Polygon<T> {
  fn from(convex: PolygonConvex<T>) -> Polygon<T> {
    convex.0
  }
}
