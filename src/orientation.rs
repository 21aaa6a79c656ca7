use crate::PolygonScalar;

#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Copy, Clone)]
pub enum Orientation {
  CounterClockWise,
  ClockWise,
  CoLinear,
}
use Orientation::*;

impl Orientation {
  /// Determine the direction you have to turn if you walk from `p1`
  /// to `p2` to `p3`.
  ///
  /// Directions assume the x-axis points right and the y-axis points up. The
  /// sign test is evaluated directly in `T` without any tolerance, so nearly
  /// colinear inputs may be misclassified.
  ///
  /// # Examples
  ///
  /// ```rust
  /// # use hullcast::data::Point;
  /// # use hullcast::Orientation;
  /// let p1 = Point::new([ 0.0, 0.0 ]);
  /// let p2 = Point::new([ 0.0, 1.0 ]); // One unit above p1.
  /// // (0,0) -> (0,1) -> (0,2) == Orientation::CoLinear
  /// assert!(Orientation::new(&p1, &p2, &Point::new([ 0.0, 2.0 ])).is_colinear());
  /// // (0,0) -> (0,1) -> (-1,2) == Orientation::CounterClockWise
  /// assert!(Orientation::new(&p1, &p2, &Point::new([ -1.0, 2.0 ])).is_ccw());
  /// // (0,0) -> (0,1) -> (1,2) == Orientation::ClockWise
  /// assert!(Orientation::new(&p1, &p2, &Point::new([ 1.0, 2.0 ])).is_cw());
  /// ```
  pub fn new<T>(p1: &[T; 2], p2: &[T; 2], p3: &[T; 2]) -> Orientation
  where
    T: PolygonScalar,
  {
    let turn = Orientation::turn(p1, p2, p3);
    if turn > T::zero() {
      CounterClockWise
    } else if turn < T::zero() {
      ClockWise
    } else {
      CoLinear
    }
  }

  /// Cross product of `p2-p1` and `p3-p2`. Positive for counter-clockwise turns.
  pub fn turn<T>(p1: &[T; 2], p2: &[T; 2], p3: &[T; 2]) -> T
  where
    T: PolygonScalar,
  {
    (p2[0] - p1[0]) * (p3[1] - p2[1]) - (p2[1] - p1[1]) * (p3[0] - p2[0])
  }

  pub fn is_colinear(self) -> bool {
    matches!(self, CoLinear)
  }

  pub fn is_ccw(self) -> bool {
    matches!(self, CounterClockWise)
  }

  pub fn is_cw(self) -> bool {
    matches!(self, ClockWise)
  }

  #[must_use]
  pub fn reverse(self) -> Orientation {
    match self {
      CounterClockWise => ClockWise,
      ClockWise => CounterClockWise,
      CoLinear => CoLinear,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::data::Point;
  use crate::testing::any_point;

  use test_strategy::proptest;

  #[test]
  fn test_turns() {
    assert_eq!(
      Orientation::new(
        &Point::new([0.0, 0.0]),
        &Point::new([1.0, 1.0]),
        &Point::new([2.0, 2.0])
      ),
      CoLinear
    );
    assert_eq!(
      Point::new([0.0, 0.0]).orientation(&Point::new([0.0, 1.0]), &Point::new([2.0, 2.0])),
      ClockWise
    );
    assert_eq!(
      Point::new([0.0, 0.0]).orientation(&Point::new([0.0, 1.0]), &Point::new([-2.0, 2.0])),
      CounterClockWise
    );
    assert_eq!(
      Point::new([0.0, 0.0]).orientation(&Point::new([0.0, 0.0]), &Point::new([0.0, 0.0])),
      CoLinear
    );
  }

  #[test]
  fn left_turn_is_ccw() {
    // (0,0) -> (1,0) -> (1,1) turns left.
    let turn = Orientation::turn(&[0.0, 0.0], &[1.0, 0.0], &[1.0, 1.0]);
    assert_eq!(turn, 1.0);
    assert!(Orientation::new(&[0.0, 0.0], &[1.0, 0.0], &[1.0, 1.0]).is_ccw());
  }

  #[test]
  fn f32_coordinates() {
    assert!(Orientation::new(&[0.0f32, 0.0], &[1.0, 0.0], &[2.0, -1.0]).is_cw());
  }

  #[proptest]
  fn orientation_reverse(
    #[strategy(any_point())] pt1: Point,
    #[strategy(any_point())] pt2: Point,
    #[strategy(any_point())] pt3: Point,
  ) {
    let abc = Orientation::new(&pt1, &pt2, &pt3);
    let cba = Orientation::new(&pt3, &pt2, &pt1);
    assert_eq!(abc, cba.reverse())
  }

  #[proptest]
  fn orientation_rotate(
    #[strategy(any_point())] pt1: Point,
    #[strategy(any_point())] pt2: Point,
    #[strategy(any_point())] pt3: Point,
  ) {
    let abc = Orientation::new(&pt1, &pt2, &pt3);
    let bca = Orientation::new(&pt2, &pt3, &pt1);
    assert_eq!(abc, bca)
  }
}
