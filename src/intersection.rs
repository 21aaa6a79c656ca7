/// Pairwise intersection between two geometric objects.
///
/// `Result` describes where the objects meet. `None` means they don't.
pub trait Intersects<T = Self> {
  type Result;
  fn intersect(self, other: T) -> Option<Self::Result>;
}
