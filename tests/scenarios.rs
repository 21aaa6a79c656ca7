mod hull {
  use hullcast::algorithms::convex_hull;
  use hullcast::data::*;
  use hullcast::*;

  #[test]
  fn interior_point_excluded() -> Result<(), Error> {
    let pts = vec![
      Point::new([0.0, 0.0]),
      Point::new([4.0, 0.0]),
      Point::new([4.0, 4.0]),
      Point::new([0.0, 4.0]),
      Point::new([2.0, 2.0]),
    ];
    let hull = convex_hull(pts)?;
    let expected = Polygon::new(vec![
      Point::new([0.0, 0.0]),
      Point::new([4.0, 0.0]),
      Point::new([4.0, 4.0]),
      Point::new([0.0, 4.0]),
    ])?;
    assert!(hull.equals(&expected));
    Ok(())
  }

  #[test]
  fn colinear_is_degenerate() {
    let pts = vec![
      Point::new([0.0, 0.0]),
      Point::new([1.0, 0.0]),
      Point::new([2.0, 0.0]),
    ];
    let err = convex_hull(pts).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DegenerateGeometry);
  }

  #[test]
  fn hull_of_hull() -> Result<(), Error> {
    let pts = vec![
      Point::new([3.0, 1.0]),
      Point::new([-2.0, 5.0]),
      Point::new([0.5, 0.5]),
      Point::new([1.0, -4.0]),
      Point::new([6.0, 6.0]),
      Point::new([-3.0, -3.0]),
      Point::new([2.0, 2.0]),
    ];
    let hull = convex_hull(pts)?;
    let again = convex_hull(hull.points().to_vec())?;
    assert!(hull.equals(&again));
    Ok(())
  }
}

mod containment {
  use hullcast::algorithms::point_in_polygon;
  use hullcast::data::*;
  use hullcast::*;

  fn square() -> Vec<Point> {
    vec![
      Point::new([0.0, 0.0]),
      Point::new([4.0, 0.0]),
      Point::new([4.0, 4.0]),
      Point::new([0.0, 4.0]),
    ]
  }

  #[test]
  fn square_queries() -> Result<(), Error> {
    assert!(point_in_polygon(&square(), &Point::new([2.0, 2.0]))?);
    assert!(!point_in_polygon(&square(), &Point::new([5.0, 5.0]))?);
    Ok(())
  }

  #[test]
  fn edge_query_is_consistent() -> Result<(), Error> {
    let first = point_in_polygon(&square(), &Point::new([4.0, 2.0]))?;
    for _ in 0..20 {
      assert_eq!(point_in_polygon(&square(), &Point::new([4.0, 2.0]))?, first);
    }
    Ok(())
  }

  #[test]
  fn triangle_queries() -> Result<(), Error> {
    let triangle = Polygon::new(vec![
      Point::new([0.0, 0.0]),
      Point::new([2.0, 0.0]),
      Point::new([1.0, 2.0]),
    ])?;
    assert!(triangle.contains(&Point::new([1.0, 1.0])));
    assert!(!triangle.contains(&Point::new([1.0, -1.0])));
    Ok(())
  }

  #[test]
  fn too_few_vertices() {
    let err = point_in_polygon(&square()[..2], &Point::new([1.0, 1.0])).unwrap_err();
    assert_eq!(err, Error::InsufficientVertices);
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
  }
}

mod pipeline {
  use hullcast::algorithms::{convex_hull, RayCaster};
  use hullcast::data::*;
  use hullcast::io;

  // hull -> obj -> polygon -> filter -> xyz, as the two binaries do it.
  #[test]
  fn hull_then_filter() {
    let input = "5\n0 0 0\n10 0 0\n10 10 0\n0 10 0\n5 5 0\n";
    let points = io::read_xyz(input.as_bytes()).unwrap();
    let hull = convex_hull(points).unwrap();

    let mut obj = Vec::new();
    io::write_obj(&mut obj, &hull).unwrap();
    let polygon = Polygon::new(io::read_obj(obj.as_slice()).unwrap()).unwrap();
    assert!(polygon.equals(&hull));

    let queries = vec![
      Point::new([5.0, 5.0]),
      Point::new([15.0, 5.0]),
      Point::new([1.0, 9.0]),
      Point::new([-1.0, 9.0]),
    ];
    let caster = RayCaster::new();
    let inside: Vec<Point> = queries
      .into_iter()
      .filter(|pt| caster.contains(&polygon, pt))
      .collect();
    assert_eq!(inside, vec![Point::new([5.0, 5.0]), Point::new([1.0, 9.0])]);

    let mut xyz = Vec::new();
    io::write_xyz(&mut xyz, &inside).unwrap();
    assert_eq!(io::read_xyz(xyz.as_slice()).unwrap(), inside);
  }
}
