mod bounding_box;
mod line_segment;
pub(crate) mod point;
pub mod polygon;

pub use bounding_box::BoundingBox;
pub use line_segment::*;

#[doc(inline)]
pub use crate::data::polygon::{EdgeIter, Polygon, PolygonConvex};
pub use point::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PointLocation {
  Inside,
  OnBoundary,
  Outside,
}
