//! Even-odd point-in-polygon test by ray casting.
//!
//! A segment is drawn from the query point to a reference point that lies
//! strictly outside the polygon. The query is inside iff the segment crosses
//! the boundary an odd number of times. Crossings that land on the same spot
//! (a shared vertex) are counted once.
use crate::data::{LineSegment, Point, Polygon};
use crate::{Error, Intersects, PolygonScalar};

/// Default distance, per coordinate, below which two crossings count as one.
pub const DEDUP_TOLERANCE: f64 = 1e-9;

// Tried in order when the horizontal ray runs through a vertex. Scaled by the
// polygon height.
const REFERENCE_OFFSETS: [f64; 6] = [0.381966, -0.236068, 0.145898, -0.527864, 0.708204, -0.090170];

/// Point-in-polygon tester.
///
/// Holds no per-polygon state, so one tester can be shared freely between
/// threads and polygons.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayCaster<T = f64> {
  tolerance: T,
}

impl<T: PolygonScalar> Default for RayCaster<T> {
  fn default() -> Self {
    RayCaster {
      tolerance: T::from_f64(DEDUP_TOLERANCE).unwrap_or_else(T::epsilon),
    }
  }
}

impl<T: PolygonScalar> RayCaster<T> {
  pub fn new() -> Self {
    Self::default()
  }

  /// Crossings closer than `tolerance` in both coordinates are merged.
  #[must_use]
  pub fn with_tolerance(tolerance: T) -> Self {
    RayCaster {
      tolerance: tolerance.abs(),
    }
  }

  pub fn tolerance(&self) -> T {
    self.tolerance
  }

  /// $O(n)$ Even-odd membership of `query` in `polygon`.
  ///
  /// Points exactly on the boundary get an answer that depends on rounding.
  /// It is stable across calls but may be either value. A non-finite query
  /// is never inside.
  pub fn contains(&self, polygon: &Polygon<T>, query: &Point<T>) -> bool {
    let reference = reference_point(polygon, query);
    let ray = LineSegment::new(*query, reference);

    let mut crossings: Vec<Point<T>> = polygon
      .iter_boundary_edges()
      .filter_map(|edge| edge.intersect(&ray))
      .collect();
    crossings.sort_unstable_by(|a, b| a.cmp_lexicographic(b));
    crossings.dedup_by(|a, b| a.approx_eq(b, self.tolerance));

    tracing::trace!(
      x = %query.x_coord(),
      y = %query.y_coord(),
      crossings = crossings.len(),
      "ray cast"
    );
    crossings.len() % 2 == 1
  }
}

/// Checked form of [`RayCaster::contains`] for raw vertex lists.
///
/// # Errors
/// * Any error of [`Polygon::new`].
/// * [`Error::NonFiniteCoordinate`] if the query is not finite.
///
/// # Examples
///
/// ```rust
/// # use hullcast::algorithms::point_in_polygon;
/// # use hullcast::data::Point;
/// let triangle = [
///   Point::new([0.0, 0.0]),
///   Point::new([2.0, 0.0]),
///   Point::new([1.0, 2.0]),
/// ];
/// assert_eq!(point_in_polygon(&triangle, &Point::new([1.0, 1.0])), Ok(true));
/// assert_eq!(point_in_polygon(&triangle, &Point::new([1.0, -1.0])), Ok(false));
/// assert!(point_in_polygon(&triangle[..2], &Point::new([1.0, 1.0])).is_err());
/// ```
pub fn point_in_polygon<T>(vertices: &[Point<T>], query: &Point<T>) -> Result<bool, Error>
where
  T: PolygonScalar,
{
  let polygon = Polygon::new(vertices.to_vec())?;
  if !query.is_finite() {
    return Err(Error::NonFiniteCoordinate);
  }
  Ok(RayCaster::default().contains(&polygon, query))
}

// A point strictly left of the polygon's bounding box. Level with the query
// unless that ray passes exactly through a vertex.
fn reference_point<T: PolygonScalar>(polygon: &Polygon<T>, query: &Point<T>) -> Point<T> {
  let bbox = polygon.bounding_box();
  let x = bbox.min.x_coord() - bbox.width().max(T::one());
  let span = bbox.height().max(T::one());

  let mut candidate = Point::new([x, query.y_coord()]);
  for offset in REFERENCE_OFFSETS.iter() {
    let ray = LineSegment::new(*query, candidate);
    let grazes_vertex = polygon
      .iter()
      .any(|vertex| vertex != query && ray.contains(vertex));
    if !grazes_vertex {
      return candidate;
    }
    let offset = T::from_f64(*offset).unwrap_or_else(T::zero) * span;
    candidate = Point::new([x, query.y_coord() + offset]);
  }
  candidate
}
