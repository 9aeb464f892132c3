//! Bounding spheres used as coarse stand-ins for detected surfaces.

use serde::{Deserialize, Serialize};

use super::vec3::{distance3, outline_point, Point3};
use crate::error::GeometryResult;

/// Bounding-volume approximation of a surface in world space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sphere {
    /// World-space center.
    pub center: Point3,
    /// Radius in world units.
    pub radius: f64,
}

impl Sphere {
    /// Creates a sphere. No validation is performed; see [`Sphere::is_valid`].
    pub fn new(center: Point3, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Returns true if the center is finite and the radius is finite and
    /// strictly positive.
    pub fn is_valid(&self) -> bool {
        self.center.is_finite() && self.radius.is_finite() && self.radius > 0.0
    }

    /// Returns true if `point` lies inside or on the sphere.
    ///
    /// # Examples
    /// ```
    /// use outline_geometry::{Point3, Sphere};
    ///
    /// let s = Sphere::new(Point3::ZERO, 1.0);
    /// assert!(s.encloses(Point3::new(1.0, 0.0, 0.0)));
    /// assert!(!s.encloses(Point3::new(1.5, 0.0, 0.0)));
    /// ```
    pub fn encloses(&self, point: Point3) -> bool {
        distance3(point, self.center) <= self.radius
    }

    /// Point on this sphere's surface facing `towards`.
    pub fn outline_towards(&self, towards: Point3) -> GeometryResult<Point3> {
        outline_point(self.center, towards, self.radius)
    }
}
