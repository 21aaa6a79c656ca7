use super::Point;
use crate::PolygonScalar;

/// Axis-aligned rectangle spanned by `min` and `max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox<T = f64> {
  pub min: Point<T>,
  pub max: Point<T>,
}

impl<T: PolygonScalar> BoundingBox<T> {
  /// `None` for an empty iterator.
  pub fn from_points<'a, I>(points: I) -> Option<BoundingBox<T>>
  where
    I: IntoIterator<Item = &'a Point<T>>,
  {
    let mut iter = points.into_iter();
    let first = *iter.next()?;
    Some(iter.fold(
      BoundingBox {
        min: first,
        max: first,
      },
      |bbox, pt| BoundingBox {
        min: Point::new([
          bbox.min.x_coord().min(pt.x_coord()),
          bbox.min.y_coord().min(pt.y_coord()),
        ]),
        max: Point::new([
          bbox.max.x_coord().max(pt.x_coord()),
          bbox.max.y_coord().max(pt.y_coord()),
        ]),
      },
    ))
  }

  pub fn width(&self) -> T {
    self.max.x_coord() - self.min.x_coord()
  }

  pub fn height(&self) -> T {
    self.max.y_coord() - self.min.y_coord()
  }

  /// Inclusive on all four sides.
  pub fn contains(&self, pt: &Point<T>) -> bool {
    self.min.x_coord() <= pt.x_coord()
      && pt.x_coord() <= self.max.x_coord()
      && self.min.y_coord() <= pt.y_coord()
      && pt.y_coord() <= self.max.y_coord()
  }
}
