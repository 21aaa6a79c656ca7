use std::ops::RangeInclusive;

use super::Point;
use crate::Intersects;
use crate::PolygonScalar;

///////////////////////////////////////////////////////////////////////////////
// LineSegment

/// Closed line segment from `src` to `dst`, both endpoints included.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment<T = f64> {
  pub src: Point<T>,
  pub dst: Point<T>,
}

impl<T> LineSegment<T> {
  pub fn new(src: Point<T>, dst: Point<T>) -> LineSegment<T> {
    LineSegment { src, dst }
  }
}

impl<T: PolygonScalar> LineSegment<T> {
  /// True iff `pt` lies exactly on the segment, endpoints included.
  pub fn contains(&self, pt: &Point<T>) -> bool {
    self.src.orientation(&self.dst, pt).is_colinear()
      && between(pt.x_coord(), self.src.x_coord(), self.dst.x_coord())
      && between(pt.y_coord(), self.src.y_coord(), self.dst.y_coord())
  }
}

fn between<T: PolygonScalar>(value: T, a: T, b: T) -> bool {
  a.min(b) <= value && value <= a.max(b)
}

impl<T> From<RangeInclusive<Point<T>>> for LineSegment<T> {
  fn from(range: RangeInclusive<Point<T>>) -> LineSegment<T> {
    let (src, dst) = range.into_inner();
    LineSegment { src, dst }
  }
}

impl<T> From<RangeInclusive<(T, T)>> for LineSegment<T> {
  fn from(range: RangeInclusive<(T, T)>) -> LineSegment<T> {
    let (src, dst) = range.into_inner();
    LineSegment {
      src: src.into(),
      dst: dst.into(),
    }
  }
}

impl<'a, T> Intersects for &'a LineSegment<T>
where
  T: PolygonScalar,
{
  type Result = Point<T>;
  fn intersect(self, other: &'a LineSegment<T>) -> Option<Self::Result> {
    segment_intersection(&self.src, &self.dst, &other.src, &other.dst)
  }
}

/// Intersection point of the closed segments `[a,b]` and `[c,d]`.
///
/// Both segments are parametrized, `a + t*(b-a)` and `c + s*(d-c)`, and the
/// resulting 2x2 system is solved with Cramer's rule. The segments meet iff
/// `s` and `t` both lie in `[0, 1]`. No tolerance is applied.
///
/// Parallel segments never intersect. This includes colinear segments that
/// overlap, for which there is no single intersection point. A zero-length
/// segment is parallel to everything.
///
/// # Examples
///
/// ```rust
/// # use hullcast::data::{segment_intersection, Point};
/// let a = Point::new([0.0, 0.0]);
/// let b = Point::new([2.0, 2.0]);
/// let c = Point::new([0.0, 2.0]);
/// let d = Point::new([2.0, 0.0]);
/// assert_eq!(segment_intersection(&a, &b, &c, &d), Some(Point::new([1.0, 1.0])));
/// assert_eq!(segment_intersection(&a, &c, &b, &d), None);
/// ```
pub fn segment_intersection<T>(
  a: &Point<T>,
  b: &Point<T>,
  c: &Point<T>,
  d: &Point<T>,
) -> Option<Point<T>>
where
  T: PolygonScalar,
{
  let s1_x = b.x_coord() - a.x_coord();
  let s1_y = b.y_coord() - a.y_coord();
  let s2_x = d.x_coord() - c.x_coord();
  let s2_y = d.y_coord() - c.y_coord();

  let denom = s1_x * s2_y - s2_x * s1_y;
  if denom == T::zero() {
    return None;
  }

  let ac_x = a.x_coord() - c.x_coord();
  let ac_y = a.y_coord() - c.y_coord();
  let s = (s1_x * ac_y - s1_y * ac_x) / denom;
  let t = (s2_x * ac_y - s2_y * ac_x) / denom;

  if unit_interval(s) && unit_interval(t) {
    Some(Point::new([
      a.x_coord() + t * s1_x,
      a.y_coord() + t * s1_y,
    ]))
  } else {
    None
  }
}

// NaN and infinities fall outside.
fn unit_interval<T: PolygonScalar>(v: T) -> bool {
  v >= T::zero() && v <= T::one()
}
