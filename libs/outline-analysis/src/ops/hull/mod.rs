//! # Convex Hull (Monotone Chain)
//!
//! Computes the 2D convex hull of a point set as an ordered polygon.
//!
//! ## Algorithm
//!
//! 1. Sort points lexicographically by `(x, y)` and drop exact duplicates
//! 2. Build the lower chain left to right, popping every vertex that does not
//!    make a strict left turn
//! 3. Build the upper chain right to left the same way
//! 4. Concatenate the chains, dropping each chain's last vertex
//!
//! ## Output
//!
//! - Counter-clockwise winding (y axis up), starting at the lowest `(x, y)` vertex
//! - 0 points → empty polygon; 1 distinct point → single-point polygon
//! - Collinear input → the two extreme points
//!
//! Turn tests use exact orientation predicates, so near-collinear input
//! cannot flip the winding.


use outline_geometry::polygon::orientation;
use outline_geometry::{Point2, Polygon};

/// Computes the convex hull of `points`.
///
/// # Examples
///
/// ```rust
/// use outline_analysis::convex_hull;
/// use outline_geometry::Point2;
///
/// let hull = convex_hull(&[
///     Point2::new(0.0, 0.0),
///     Point2::new(4.0, 0.0),
///     Point2::new(2.0, 1.0), // interior
///     Point2::new(4.0, 4.0),
///     Point2::new(0.0, 4.0),
/// ]);
/// assert_eq!(hull.len(), 4);
/// assert!(hull.signed_area() > 0.0);
/// ```
pub fn convex_hull(points: &[Point2]) -> Polygon {
    let mut sorted: Vec<Point2> = points.to_vec();
    sorted.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
    sorted.dedup();

    if sorted.len() <= 2 {
        return Polygon::new(sorted);
    }

    let mut lower: Vec<Point2> = Vec::with_capacity(sorted.len());
    for &p in &sorted {
        push_with_left_turn(&mut lower, p);
    }

    let mut upper: Vec<Point2> = Vec::with_capacity(sorted.len());
    for &p in sorted.iter().rev() {
        push_with_left_turn(&mut upper, p);
    }

    lower.pop();
    upper.pop();
    lower.extend(upper);
    Polygon::new(lower)
}

/// Pushes `p` onto `chain` after removing vertices that would not turn left.
fn push_with_left_turn(chain: &mut Vec<Point2>, p: Point2) {
    while chain.len() >= 2 && orientation(chain[chain.len() - 2], chain[chain.len() - 1], p) <= 0.0 {
        chain.pop();
    }
    chain.push(p);
}
