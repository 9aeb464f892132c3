//! Screen-space point definitions.
//!
//! Provides the `Point2` alias for `glam::DVec2` and the planar distance used
//! by density clustering.

pub use glam::DVec2 as Point2;

/// Euclidean distance between two screen-space points.
///
/// # Examples
/// ```
/// use outline_geometry::{distance2, Point2};
///
/// let d = distance2(Point2::new(0.0, 0.0), Point2::new(3.0, 4.0));
/// assert_eq!(d, 5.0);
/// ```
#[inline]
pub fn distance2(a: Point2, b: Point2) -> f64 {
    a.distance(b)
}

#[cfg(test)]
mod tests;
