//! World-space point definitions and vector helpers.
//!
//! `Point3` is `glam::DVec3`, so add, subtract, scale and length come from
//! glam. The helpers here add the fallible pieces the pipeline relies on.

use config::constants::DEGENERATE_LENGTH_EPSILON;

use crate::error::{GeometryError, GeometryResult};

pub use glam::DVec3 as Point3;

/// Euclidean distance between two world-space points.
///
/// # Examples
/// ```
/// use outline_geometry::{distance3, Point3};
///
/// let d = distance3(Point3::new(1.0, 2.0, 2.0), Point3::ZERO);
/// assert_eq!(d, 3.0);
/// ```
#[inline]
pub fn distance3(a: Point3, b: Point3) -> f64 {
    a.distance(b)
}

/// Returns the unit vector pointing along `v`.
///
/// # Errors
///
/// [`GeometryError::DegenerateVector`] when `v` has zero length (or is not
/// finite).
pub fn normalize(v: Point3) -> GeometryResult<Point3> {
    let length = v.length();
    if !length.is_finite() || length <= DEGENERATE_LENGTH_EPSILON {
        return Err(GeometryError::DegenerateVector {
            x: v.x,
            y: v.y,
            z: v.z,
        });
    }
    Ok(v / length)
}

/// Point on the sphere around `center` with the given `radius`, in the
/// direction of `towards`.
///
/// # Errors
///
/// [`GeometryError::DegenerateVector`] when `towards` coincides with `center`.
///
/// # Examples
/// ```
/// use outline_geometry::{outline_point, Point3};
///
/// let p = outline_point(Point3::new(4.0, 0.0, 0.0), Point3::ZERO, 1.0).unwrap();
/// assert_eq!(p, Point3::new(3.0, 0.0, 0.0));
/// ```
pub fn outline_point(center: Point3, towards: Point3, radius: f64) -> GeometryResult<Point3> {
    let direction = normalize(towards - center)?;
    Ok(center + direction * radius)
}
