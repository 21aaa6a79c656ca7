// Strategies for property tests.
//
// Coordinates are small integers stored as floats. Every predicate in the
// crate is then evaluated without rounding, so properties can be asserted
// exactly.
use crate::algorithms::convex_hull;
use crate::data::{Point, Polygon, PolygonConvex};

use proptest::collection::*;
use proptest::prelude::*;

const COORD_RANGE: std::ops::Range<i32> = -1000..1000;

pub fn any_point() -> impl Strategy<Value = Point> {
  (COORD_RANGE, COORD_RANGE).prop_map(|(x, y)| Point::new([f64::from(x), f64::from(y)]))
}

pub fn point_set(min: usize, max: usize) -> impl Strategy<Value = Vec<Point>> {
  vec(any_point(), min..max)
}

pub fn convex_polygon() -> impl Strategy<Value = PolygonConvex> {
  point_set(3, 50).prop_filter_map("Colinear point set", |pts| convex_hull(pts).ok())
}

// x-monotone polygon: a bottom chain below y=0 from left to right, then a
// top chain above y=0 back to the left. Always simple and counter-clockwise.
pub fn comb_polygon() -> impl Strategy<Value = Polygon> {
  (1usize..12)
    .prop_flat_map(|n| (vec(0i32..50, n + 1), vec(1i32..50, n + 1)))
    .prop_map(|(bottom, top)| {
      let n = bottom.len();
      let column = |i: usize| f64::from(4 * i as i32);
      let mut pts: Vec<Point> = (0..n)
        .map(|i| Point::new([column(i), -f64::from(bottom[i])]))
        .collect();
      pts.extend((0..n).rev().map(|i| Point::new([column(i), f64::from(top[i])])));
      Polygon::new_unchecked(pts)
    })
}
