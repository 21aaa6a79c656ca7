#![deny(clippy::cast_lossless)]
#![doc(test(no_crate_inject))]
//! Convex hulls and point-in-polygon tests for planar point sets.
//!
//! ```rust
//! # use hullcast::algorithms::convex_hull;
//! # use hullcast::data::Point;
//! let points = vec![
//!   Point::new([0.0, 0.0]),
//!   Point::new([4.0, 0.0]),
//!   Point::new([4.0, 4.0]),
//!   Point::new([0.0, 4.0]),
//!   Point::new([2.0, 2.0]),
//! ];
//! let hull = convex_hull(points).unwrap();
//! assert_eq!(hull.len(), 4);
//! assert!(hull.contains(&Point::new([1.0, 3.0])));
//! assert!(!hull.contains(&Point::new([5.0, 5.0])));
//! ```
use num_traits::float::FloatCore;
use num_traits::FromPrimitive;

pub mod algorithms;
pub mod data;
mod intersection;
pub mod io;
mod orientation;

pub use orientation::Orientation;

pub use intersection::Intersects;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  InsufficientVertices,
  NonFiniteCoordinate,
  DuplicatePoints,
  ZeroArea,
  /// Two consecutive line segments are either colinear or oriented clockwise.
  ConvexViolation,
  CoLinearViolation,
}

/// Coarse classification of [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
  /// The caller supplied something the operation is not defined for.
  InvalidInput,
  /// The input is well-formed but has no area to work with.
  DegenerateGeometry,
}

impl Error {
  pub fn kind(&self) -> ErrorKind {
    match self {
      Error::InsufficientVertices | Error::NonFiniteCoordinate | Error::ConvexViolation => {
        ErrorKind::InvalidInput
      }
      Error::DuplicatePoints | Error::ZeroArea | Error::CoLinearViolation => {
        ErrorKind::DegenerateGeometry
      }
    }
  }
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    match self {
      Error::InsufficientVertices => write!(f, "Insufficient vertices"),
      Error::NonFiniteCoordinate => write!(f, "Non-finite coordinate"),
      Error::DuplicatePoints => write!(f, "All points are identical"),
      Error::ZeroArea => write!(f, "Polygon has zero area"),
      Error::ConvexViolation => write!(f, "Convex violation"),
      Error::CoLinearViolation => write!(
        f,
        "All points are colinear and no valid solution exists"
      ),
    }
  }
}

impl std::error::Error for Error {}

/// Scalar type usable as a point coordinate.
///
/// Implemented for `f32` and `f64`. All predicates are evaluated directly in
/// the scalar type; there is no exact or adaptive fallback.
pub trait PolygonScalar:
  FloatCore + FromPrimitive + std::fmt::Debug + std::fmt::Display + Send + Sync + 'static
{
  fn from_constant(val: i8) -> Self;
}

macro_rules! floating_precision {
  ( $( $ty:ty ),* ) => {
    $(
      impl PolygonScalar for $ty {
        fn from_constant(val: i8) -> Self {
          <$ty>::from(val)
        }
      }
    )*
  };
}

floating_precision!(f32, f64);

#[cfg(test)]
pub mod testing;
