use crate::data::LineSegment;
use crate::data::Point;

pub struct Iter<'a, T: 'a> {
  pub(crate) iter: std::slice::Iter<'a, Point<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
  type Item = &'a Point<T>;
  fn next(&mut self) -> Option<&'a Point<T>> {
    self.iter.next()
  }
}

pub struct EdgeIter<'a, T: 'a> {
  pub(crate) vertices: &'a [Point<T>],
  pub(crate) index: usize,
}

impl<'a, T: Copy> Iterator for EdgeIter<'a, T> {
  type Item = LineSegment<T>;
  fn next(&mut self) -> Option<Self::Item> {
    let n = self.vertices.len();
    if self.index >= n {
      return None;
    }
    let src = self.vertices[self.index];
    let dst = self.vertices[(self.index + 1) % n];
    self.index += 1;
    Some(LineSegment { src, dst })
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    let remaining = self.vertices.len() - self.index;
    (remaining, Some(remaining))
  }
}

impl<'a, T: Copy> ExactSizeIterator for EdgeIter<'a, T> {}
