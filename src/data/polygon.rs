use crate::data::{BoundingBox, Point};
use crate::{Error, PolygonScalar};

mod iter;
pub use iter::*;

mod convex;
pub use convex::*;

/// Simple polygon given by its vertices. The last vertex connects back to
/// the first.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon<T = f64> {
  pub(crate) vertices: Vec<Point<T>>,
}

impl<T> Polygon<T> {
  pub fn new_unchecked(vertices: Vec<Point<T>>) -> Polygon<T> {
    Polygon { vertices }
  }

  /// Vertex order is kept exactly as given, clockwise or counter-clockwise.
  ///
  /// # Errors
  /// * [`Error::InsufficientVertices`] for fewer than three vertices.
  /// * [`Error::NonFiniteCoordinate`] if any coordinate is NaN or infinite.
  /// * [`Error::ZeroArea`] if the vertices enclose no area.
  pub fn new(points: Vec<Point<T>>) -> Result<Polygon<T>, Error>
  where
    T: PolygonScalar,
  {
    let p = Self::new_unchecked(points);
    p.validate()?;
    Ok(p)
  }
}

impl<T: PolygonScalar> Polygon<T> {
  // Self intersections are not detected.
  pub fn validate(&self) -> Result<(), Error> {
    if self.vertices.len() < 3 {
      return Err(Error::InsufficientVertices);
    }
    if !self.vertices.iter().all(Point::is_finite) {
      return Err(Error::NonFiniteCoordinate);
    }
    if self.signed_area_2x() == T::zero() {
      return Err(Error::ZeroArea);
    }
    Ok(())
  }

  /// Positive for counter-clockwise vertex order.
  pub fn signed_area(&self) -> T {
    self.signed_area_2x() / T::from_constant(2)
  }

  pub fn signed_area_2x(&self) -> T {
    self
      .iter_boundary_edges()
      .map(|edge| {
        let p = edge.src;
        let q = edge.dst;
        p.x_coord() * q.y_coord() - q.x_coord() * p.y_coord()
      })
      .fold(T::zero(), |acc, v| acc + v)
  }

  /// # Panics
  ///
  /// Panics if the polygon has no vertices.
  pub fn bounding_box(&self) -> BoundingBox<T> {
    BoundingBox::from_points(&self.vertices).expect("polygon without vertices")
  }

  /// Even-odd membership test using the default [`RayCaster`](crate::algorithms::RayCaster).
  ///
  /// Points on the boundary get an unspecified but repeatable answer.
  pub fn contains(&self, pt: &Point<T>) -> bool {
    crate::algorithms::RayCaster::default().contains(self, pt)
  }

  /// Same vertices in the same cyclic order, possibly starting at a
  /// different vertex.
  pub fn equals(&self, other: &Polygon<T>) -> bool {
    let n = self.vertices.len();
    if n != other.vertices.len() {
      return false;
    }
    if n == 0 {
      return true;
    }
    (0..n).any(|offset| (0..n).all(|i| self.vertices[i] == other.vertices[(i + offset) % n]))
  }
}

impl<T> Polygon<T> {
  pub fn point(&self, idx: usize) -> &Point<T> {
    &self.vertices[idx]
  }

  pub fn points(&self) -> &[Point<T>] {
    &self.vertices
  }

  pub fn into_points(self) -> Vec<Point<T>> {
    self.vertices
  }

  pub fn len(&self) -> usize {
    self.vertices.len()
  }

  pub fn is_empty(&self) -> bool {
    self.vertices.is_empty()
  }

  pub fn iter(&self) -> Iter<'_, T> {
    Iter {
      iter: self.vertices.iter(),
    }
  }

  /// Edges in vertex order, ending with the edge from the last vertex back
  /// to the first.
  pub fn iter_boundary_edges(&self) -> EdgeIter<'_, T> {
    EdgeIter {
      vertices: &self.vertices,
      index: 0,
    }
  }

  pub fn cast<U, F>(self, f: F) -> Polygon<U>
  where
    T: Clone,
    F: Fn(T) -> U + Clone,
  {
    Polygon {
      vertices: self
        .vertices
        .into_iter()
        .map(|p| p.cast(f.clone()))
        .collect(),
    }
  }
}
