//! Camera projection seam.
//!
//! The camera model belongs to the rendering collaborator. The kernel only
//! wraps it and snaps the result to whole screen pixels, discarding the
//! fractional part (truncation toward zero) to match how outlines are
//! rasterized downstream.

use crate::core::vec2::Point2;
use crate::core::vec3::Point3;

/// Maps world-space points to screen space.
///
/// Implemented for every `Fn(Point3) -> Point2`, so closures can be passed
/// directly.
pub trait Projector {
    /// Projects a world-space point to sub-pixel screen coordinates.
    fn project_point(&self, point: Point3) -> Point2;
}

impl<F> Projector for F
where
    F: Fn(Point3) -> Point2,
{
    fn project_point(&self, point: Point3) -> Point2 {
        self(point)
    }
}

/// Projects one point and snaps it to integer screen coordinates.
///
/// # Examples
/// ```
/// use outline_geometry::{project, Point2, Point3};
///
/// let camera = |p: Point3| Point2::new(p.x * 10.0, p.y * 10.0);
/// let screen = project(Point3::new(1.27, -0.59, 3.0), &camera);
/// assert_eq!(screen, Point2::new(12.0, -5.0));
/// ```
pub fn project<P>(point: Point3, projector: &P) -> Point2
where
    P: Projector + ?Sized,
{
    let screen = projector.project_point(point);
    Point2::new(screen.x.trunc(), screen.y.trunc())
}

/// Projects a batch of points in order.
pub fn project_all<P>(points: &[Point3], projector: &P) -> Vec<Point2>
where
    P: Projector + ?Sized,
{
    points.iter().map(|p| project(*p, projector)).collect()
}
