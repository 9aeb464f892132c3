//! Axis-aligned screen rectangles.

use serde::{Deserialize, Serialize};

use crate::core::vec2::Point2;
use crate::polygon::Polygon;

/// Axis-aligned rectangle given by its minimum corner and size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Minimum corner.
    pub origin: Point2,
    /// Width and height.
    pub size: Point2,
}

impl Rect {
    /// Creates a rectangle from its minimum corner and size.
    pub fn new(origin: Point2, size: Point2) -> Self {
        Self { origin, size }
    }

    /// Rectangle anchored at the screen origin.
    ///
    /// # Examples
    /// ```
    /// use outline_geometry::Rect;
    ///
    /// let screen = Rect::from_size(390.0, 844.0);
    /// assert_eq!(screen.max().y, 844.0);
    /// ```
    pub fn from_size(width: f64, height: f64) -> Self {
        Self::new(Point2::ZERO, Point2::new(width, height))
    }

    /// Maximum corner.
    pub fn max(&self) -> Point2 {
        self.origin + self.size
    }

    /// Returns true if the rectangle has positive, finite width and height.
    pub fn is_valid(&self) -> bool {
        self.origin.is_finite() && self.size.is_finite() && self.size.x > 0.0 && self.size.y > 0.0
    }

    /// Returns true if `point` lies inside or on the rectangle.
    pub fn contains(&self, point: Point2) -> bool {
        let max = self.max();
        point.x >= self.origin.x && point.x <= max.x && point.y >= self.origin.y && point.y <= max.y
    }

    /// The rectangle as a counter-clockwise polygon starting at the origin.
    pub fn to_polygon(&self) -> Polygon {
        let min = self.origin;
        let max = self.max();
        Polygon::new(vec![
            Point2::new(min.x, min.y),
            Point2::new(max.x, min.y),
            Point2::new(max.x, max.y),
            Point2::new(min.x, max.y),
        ])
    }
}
