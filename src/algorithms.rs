pub mod containment;
pub mod convex_hull;

#[doc(inline)]
pub use convex_hull::graham_scan::convex_hull;

#[doc(inline)]
pub use containment::{point_in_polygon, RayCaster, DEDUP_TOLERANCE};
