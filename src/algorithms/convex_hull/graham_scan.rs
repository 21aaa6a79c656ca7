use crate::data::{Point, Polygon, PolygonConvex};
use crate::{Error, Orientation, PolygonScalar};

// https://en.wikipedia.org/wiki/Graham_scan

// Properties:
//    No panics.
//    All Ok results are strictly convex and counter-clockwise.
//    No points are outside the resulting convex polygon.
/// $O(n \log n)$ Convex hull of a set of points.
///
/// [Graham scan][wiki] algorithm for finding the smallest convex polygon which
/// contains all the given points.
///
/// The points are taken by value and sorted in place. The hull starts at the
/// lowest point (ties broken by the smallest x coordinate) and runs
/// counter-clockwise. Points on the hull boundary that are not corners are
/// dropped. Duplicate points are allowed.
///
/// # Errors
/// * [`Error::InsufficientVertices`] if fewer than three points are given.
/// * [`Error::NonFiniteCoordinate`] if any coordinate is NaN or infinite.
/// * [`Error::DuplicatePoints`] if all points are identical.
/// * [`Error::CoLinearViolation`] if all points lie on a single line.
///
/// # Properties
/// * No points from the input set will be outside the returned convex polygon.
/// * All vertices in the convex polygon are from the input set.
///
/// # Examples
///
/// ```rust
/// # use hullcast::algorithms::convex_hull;
/// # use hullcast::data::Point;
/// # use hullcast::Error;
/// let empty_set: Vec<Point> = vec![];
/// assert_eq!(
///   convex_hull(empty_set).err(),
///   Some(Error::InsufficientVertices))
/// ```
///
/// ```rust
/// # use hullcast::algorithms::convex_hull;
/// # use hullcast::data::Point;
/// # use hullcast::Error;
/// let line = vec![Point::new([0.0, 0.0]), Point::new([1.0, 0.0]), Point::new([2.0, 0.0])];
/// assert_eq!(
///   convex_hull(line).err(),
///   Some(Error::CoLinearViolation))
/// ```
///
/// [wiki]: https://en.wikipedia.org/wiki/Graham_scan
pub fn convex_hull<T>(mut pts: Vec<Point<T>>) -> Result<PolygonConvex<T>, Error>
where
  T: PolygonScalar,
{
  if pts.len() < 3 {
    tracing::debug!(points = pts.len(), "too few points for a hull");
    return Err(Error::InsufficientVertices);
  }
  if !pts.iter().all(Point::is_finite) {
    return Err(Error::NonFiniteCoordinate);
  }
  let smallest = smallest_point(&pts)?;

  // The same orientation test orders the points and drives the scan below.
  pts.sort_unstable_by(|a, b| {
    smallest
      .ccw_cmp_around(a, b)
      .then_with(|| smallest.cmp_distance_to(a, b))
  });

  let mut hull: Vec<Point<T>> = Vec::with_capacity(pts.len());
  for pt in pts.iter() {
    while hull.len() >= 2 {
      let last = &hull[hull.len() - 1];
      let second = &hull[hull.len() - 2];
      if second.orientation(last, pt) == Orientation::CounterClockWise {
        break;
      }
      hull.pop();
    }
    hull.push(*pt);
  }

  if hull.len() < 3 {
    let err = if pts.iter().all(|pt| *pt == smallest) {
      Error::DuplicatePoints
    } else {
      Error::CoLinearViolation
    };
    tracing::debug!(points = pts.len(), %err, "degenerate point set");
    return Err(err);
  }
  tracing::debug!(points = pts.len(), vertices = hull.len(), "convex hull");
  Ok(PolygonConvex::new_unchecked(Polygon::new_unchecked(hull)))
}

// Lowest y, ties broken by lowest x.
// O(n)
fn smallest_point<T>(pts: &[Point<T>]) -> Result<Point<T>, Error>
where
  T: PolygonScalar,
{
  Ok(
    *pts
      .iter()
      .min_by_key(|a| a.bottom_left_key())
      .ok_or(Error::InsufficientVertices)?,
  )
}
