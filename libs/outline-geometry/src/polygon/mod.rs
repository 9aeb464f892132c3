//! # Polygons
//!
//! Ordered, closed sequences of screen-space points. The first point
//! implicitly connects to the last.
//!
//! Containment is computed directly on the coordinates (ray casting for the
//! even-odd rule, winding numbers for the non-zero rule), so no platform
//! path type is involved.

use robust::{orient2d, Coord};
use serde::{Deserialize, Serialize};

use crate::core::vec2::Point2;

/// Orientation of the triangle `a, b, c`.
///
/// Positive when the points turn counter-clockwise, negative when clockwise
/// and zero when collinear. Uses adaptive-precision arithmetic so the sign is
/// exact.
#[inline]
pub fn orientation(a: Point2, b: Point2, c: Point2) -> f64 {
    orient2d(
        Coord { x: a.x, y: a.y },
        Coord { x: b.x, y: b.y },
        Coord { x: c.x, y: c.y },
    )
}

/// A closed polygon in screen space.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    points: Vec<Point2>,
}

impl Polygon {
    /// Creates a polygon from its vertices in order.
    pub fn new(points: Vec<Point2>) -> Self {
        Self { points }
    }

    /// Creates an empty polygon (nothing to draw).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Vertices in order.
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// Consumes the polygon, returning its vertices.
    pub fn into_points(self) -> Vec<Point2> {
        self.points
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the polygon has no vertices.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns true if the polygon cannot be drawn as an outline: zero or one
    /// vertex.
    pub fn is_degenerate(&self) -> bool {
        self.points.len() < 2
    }

    /// Iterates over the closed edges `(start, end)`, including the edge from
    /// the last vertex back to the first.
    pub fn edges(&self) -> impl Iterator<Item = (Point2, Point2)> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| (self.points[i], self.points[(i + 1) % n]))
    }

    /// Signed area by the shoelace formula. Positive for counter-clockwise
    /// winding (y axis up), negative for clockwise.
    pub fn signed_area(&self) -> f64 {
        if self.points.len() < 3 {
            return 0.0;
        }
        let twice: f64 = self
            .edges()
            .map(|(a, b)| a.x * b.y - b.x * a.y)
            .sum();
        twice / 2.0
    }

    /// The same outline with the opposite winding.
    ///
    /// # Examples
    /// ```
    /// use outline_geometry::{Point2, Polygon};
    ///
    /// let tri = Polygon::new(vec![
    ///     Point2::new(0.0, 0.0),
    ///     Point2::new(4.0, 0.0),
    ///     Point2::new(0.0, 4.0),
    /// ]);
    /// assert_eq!(tri.reversed().signed_area(), -tri.signed_area());
    /// ```
    pub fn reversed(&self) -> Self {
        // Keep the start vertex, walk the ring backwards.
        match self.points.split_first() {
            Some((first, rest)) => {
                let mut points = Vec::with_capacity(self.points.len());
                points.push(*first);
                points.extend(rest.iter().rev().copied());
                Self { points }
            }
            None => Self::empty(),
        }
    }

    /// Even-odd (ray casting) containment test.
    ///
    /// A polygon with one or zero vertices contains nothing.
    ///
    /// # Examples
    /// ```
    /// use outline_geometry::{Point2, Polygon};
    ///
    /// let square = Polygon::new(vec![
    ///     Point2::new(0.0, 0.0),
    ///     Point2::new(10.0, 0.0),
    ///     Point2::new(10.0, 10.0),
    ///     Point2::new(0.0, 10.0),
    /// ]);
    /// assert!(square.contains(Point2::new(5.0, 5.0)));
    /// assert!(!square.contains(Point2::new(15.0, 5.0)));
    /// ```
    pub fn contains(&self, test: Point2) -> bool {
        if self.points.len() <= 1 {
            return false;
        }
        let mut inside = false;
        for (a, b) in self.edges() {
            if (a.y > test.y) != (b.y > test.y) {
                let crossing_x = (b.x - a.x) * (test.y - a.y) / (b.y - a.y) + a.x;
                if test.x < crossing_x {
                    inside = !inside;
                }
            }
        }
        inside
    }

    /// Winding number of the polygon around `test`. Counter-clockwise loops
    /// count positive.
    pub fn winding_number(&self, test: Point2) -> i32 {
        if self.points.len() <= 1 {
            return 0;
        }
        let mut winding = 0;
        for (a, b) in self.edges() {
            if a.y <= test.y {
                if b.y > test.y && orientation(a, b, test) > 0.0 {
                    winding += 1;
                }
            } else if b.y <= test.y && orientation(a, b, test) < 0.0 {
                winding -= 1;
            }
        }
        winding
    }
}

impl From<Vec<Point2>> for Polygon {
    fn from(points: Vec<Point2>) -> Self {
        Self::new(points)
    }
}
