//! Neighborhood table for DBSCAN.
//!
//! Naive O(n²) pairwise scan. Every list is in input order and includes the
//! point itself, so region queries during expansion are plain lookups.

use outline_geometry::Point2;

/// Distance functions usable by the clustering engine.
#[cfg(not(feature = "parallel"))]
pub trait DistanceFn: Fn(Point2, Point2) -> f64 {}

#[cfg(not(feature = "parallel"))]
impl<T> DistanceFn for T where T: Fn(Point2, Point2) -> f64 {}

/// Distance functions usable by the clustering engine.
///
/// The `parallel` feature shares the function across rayon workers, so it
/// must be `Sync`.
#[cfg(feature = "parallel")]
pub trait DistanceFn: Fn(Point2, Point2) -> f64 + Sync {}

#[cfg(feature = "parallel")]
impl<T> DistanceFn for T where T: Fn(Point2, Point2) -> f64 + Sync {}

/// Indices of all points within `radius` of `points[index]`.
fn region_query<D: DistanceFn>(points: &[Point2], index: usize, radius: f64, distance: &D) -> Vec<usize> {
    let center = points[index];
    points
        .iter()
        .enumerate()
        .filter(|(_, other)| distance(center, **other) <= radius)
        .map(|(j, _)| j)
        .collect()
}

#[cfg(not(feature = "parallel"))]
pub(super) fn neighbor_table<D: DistanceFn>(points: &[Point2], radius: f64, distance: &D) -> Vec<Vec<usize>> {
    (0..points.len())
        .map(|i| region_query(points, i, radius, distance))
        .collect()
}

#[cfg(feature = "parallel")]
pub(super) fn neighbor_table<D: DistanceFn>(points: &[Point2], radius: f64, distance: &D) -> Vec<Vec<usize>> {
    use rayon::prelude::*;

    // Indexed collect keeps the table in input order.
    (0..points.len())
        .into_par_iter()
        .map(|i| region_query(points, i, radius, distance))
        .collect()
}
