use ordered_float::OrderedFloat;
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::cmp::Ordering;
use std::fmt::Debug;
use std::ops::Deref;
use std::ops::Index;

use crate::{Orientation, PolygonScalar};

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Point<T = f64> {
  pub array: [T; 2],
}

// Random sampling.
impl<T> Distribution<Point<T>> for Standard
where
  Standard: Distribution<T>,
{
  fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Point<T> {
    Point {
      array: [rng.gen(), rng.gen()],
    }
  }
}

impl<T> Point<T> {
  pub const fn new(array: [T; 2]) -> Point<T> {
    Point { array }
  }

  pub fn cast<U, F>(&self, f: F) -> Point<U>
  where
    T: Clone,
    F: Fn(T) -> U,
  {
    Point {
      array: [f(self.array[0].clone()), f(self.array[1].clone())],
    }
  }
}

impl<T: PolygonScalar> Point<T> {
  pub fn x_coord(&self) -> T {
    self.array[0]
  }

  pub fn y_coord(&self) -> T {
    self.array[1]
  }

  pub fn is_finite(&self) -> bool {
    self.array.iter().all(|c| c.is_finite())
  }

  pub fn squared_euclidean_distance(&self, rhs: &Point<T>) -> T {
    let dx = self.array[0] - rhs.array[0];
    let dy = self.array[1] - rhs.array[1];
    dx * dx + dy * dy
  }

  pub fn cmp_distance_to(&self, p: &Point<T>, q: &Point<T>) -> Ordering {
    OrderedFloat(self.squared_euclidean_distance(p))
      .cmp(&OrderedFloat(self.squared_euclidean_distance(q)))
  }

  pub fn orientation(&self, q: &Point<T>, r: &Point<T>) -> Orientation {
    Orientation::new(&self.array, &q.array, &r.array)
  }

  /// Compare `p` and `q` by their angle around `self`.
  ///
  /// `p` comes first if walking `self -> p -> q` turns counter-clockwise.
  /// Points colinear with `self` compare equal. This is only a total order
  /// when every point lies in the half-plane on or above `self` (with points
  /// level with `self` to its right), which holds when `self` is the lowest,
  /// then leftmost, point of the set.
  pub fn ccw_cmp_around(&self, p: &Point<T>, q: &Point<T>) -> Ordering {
    match self.orientation(p, q) {
      Orientation::CounterClockWise => Ordering::Less,
      Orientation::ClockWise => Ordering::Greater,
      Orientation::CoLinear => Ordering::Equal,
    }
  }

  /// Lexicographic (x, then y) total order. NaN sorts after every number.
  pub fn cmp_lexicographic(&self, other: &Point<T>) -> Ordering {
    self.ordered_key().cmp(&other.ordered_key())
  }

  /// Lowest y, then lowest x.
  pub(crate) fn bottom_left_key(&self) -> (OrderedFloat<T>, OrderedFloat<T>) {
    (OrderedFloat(self.array[1]), OrderedFloat(self.array[0]))
  }

  fn ordered_key(&self) -> (OrderedFloat<T>, OrderedFloat<T>) {
    (OrderedFloat(self.array[0]), OrderedFloat(self.array[1]))
  }

  /// Both coordinates within `tolerance` of each other.
  pub fn approx_eq(&self, other: &Point<T>, tolerance: T) -> bool {
    (self.array[0] - other.array[0]).abs() <= tolerance
      && (self.array[1] - other.array[1]).abs() <= tolerance
  }
}

impl<T> Index<usize> for Point<T> {
  type Output = T;
  fn index(&self, key: usize) -> &T {
    self.array.index(key)
  }
}

impl<T> From<(T, T)> for Point<T> {
  fn from(point: (T, T)) -> Point<T> {
    Point {
      array: [point.0, point.1],
    }
  }
}

impl<T> From<[T; 2]> for Point<T> {
  fn from(array: [T; 2]) -> Point<T> {
    Point { array }
  }
}

impl<T> Deref for Point<T> {
  type Target = [T; 2];
  fn deref(&self) -> &[T; 2] {
    &self.array
  }
}

#[cfg(test)]
pub mod tests {
  use super::*;
  use crate::testing::*;

  use rand::SeedableRng;
  use test_strategy::proptest;

  #[test]
  fn accessors() {
    let pt = Point::new([1.5, -2.0]);
    assert_eq!(pt.x_coord(), 1.5);
    assert_eq!(pt.y_coord(), -2.0);
    assert_eq!(pt[0], 1.5);
    assert_eq!(Point::from((1.5, -2.0)), pt);
  }

  #[test]
  fn finiteness() {
    assert!(Point::new([0.0, 1e300]).is_finite());
    assert!(!Point::new([f64::NAN, 0.0]).is_finite());
    assert!(!Point::new([0.0, f64::NEG_INFINITY]).is_finite());
  }

  #[test]
  fn distance_ordering() {
    let origin = Point::new([0.0, 0.0]);
    let near = Point::new([1.0, 1.0]);
    let far = Point::new([3.0, 0.0]);
    assert_eq!(origin.squared_euclidean_distance(&far), 9.0);
    assert_eq!(origin.cmp_distance_to(&near, &far), Ordering::Less);
    assert_eq!(origin.cmp_distance_to(&far, &near), Ordering::Greater);
    assert_eq!(origin.cmp_distance_to(&far, &far), Ordering::Equal);
  }

  #[test]
  fn ccw_cmp_around_bottom_point() {
    let pivot = Point::new([0.0, 0.0]);
    let east = Point::new([4.0, 0.0]);
    let diagonal = Point::new([4.0, 4.0]);
    let north = Point::new([0.0, 4.0]);
    assert_eq!(pivot.ccw_cmp_around(&east, &diagonal), Ordering::Less);
    assert_eq!(pivot.ccw_cmp_around(&north, &diagonal), Ordering::Greater);
    assert_eq!(
      pivot.ccw_cmp_around(&diagonal, &Point::new([2.0, 2.0])),
      Ordering::Equal
    );
  }

  #[test]
  fn lexicographic_ordering() {
    let a = Point::new([0.0, 5.0]);
    let b = Point::new([1.0, 0.0]);
    assert_eq!(a.cmp_lexicographic(&b), Ordering::Less);
    assert_eq!(b.cmp_lexicographic(&a), Ordering::Greater);
    assert_eq!(a.cmp_lexicographic(&a), Ordering::Equal);
  }

  #[test]
  fn approx_eq_tolerance() {
    let a = Point::new([1.0, 1.0]);
    assert!(a.approx_eq(&Point::new([1.0 + 1e-12, 1.0]), 1e-9));
    assert!(!a.approx_eq(&Point::new([1.0, 1.1]), 1e-9));
  }

  #[test]
  fn random_points() {
    let mut rng = rand::rngs::SmallRng::seed_from_u64(1);
    let pt: Point<f64> = rng.gen();
    assert!(pt.is_finite());
    let cast: Point<f32> = pt.cast(|c| c as f32);
    assert!(cast.is_finite());
  }

  #[proptest]
  fn squared_distance_symmetric(
    #[strategy(any_point())] pt1: Point,
    #[strategy(any_point())] pt2: Point,
  ) {
    assert_eq!(
      pt1.squared_euclidean_distance(&pt2),
      pt2.squared_euclidean_distance(&pt1)
    );
  }
}
