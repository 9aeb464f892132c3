//! # Region Compositor
//!
//! Combines the overlay bounds with hull outlines into one region: the
//! highlighted area minus the hull interiors.
//!
//! The region is a data contract only. The first sub-path is the bounds
//! rectangle (counter-clockwise); every following sub-path is a hull with its
//! winding reversed. Under the even-odd rule each hull punches a hole, and
//! because the windings oppose, the non-zero rule agrees wherever hulls do
//! not overlap.

#[cfg(test)]
mod tests;

use outline_geometry::{Point2, Polygon, Rect};
use serde::{Deserialize, Serialize};

/// How overlapping sub-paths combine into filled area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FillRule {
    /// A point is filled if a ray from it crosses an odd number of edges.
    #[default]
    EvenOdd,
    /// A point is filled if the sub-paths wind around it a non-zero number of times.
    NonZero,
}

/// Ordered sub-paths plus the fill rule to draw them with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositeRegion {
    subpaths: Vec<Polygon>,
    fill_rule: FillRule,
}

impl CompositeRegion {
    /// All sub-paths: bounds first, then the reversed hulls.
    pub fn subpaths(&self) -> &[Polygon] {
        &self.subpaths
    }

    /// The bounds sub-path.
    pub fn bounds(&self) -> Option<&Polygon> {
        self.subpaths.first()
    }

    /// The reversed hull sub-paths.
    pub fn holes(&self) -> &[Polygon] {
        self.subpaths.get(1..).unwrap_or_default()
    }

    /// Fill rule for the renderer.
    pub fn fill_rule(&self) -> FillRule {
        self.fill_rule
    }

    /// Returns a copy drawn with a different fill rule.
    pub fn with_fill_rule(mut self, fill_rule: FillRule) -> Self {
        self.fill_rule = fill_rule;
        self
    }

    /// Returns true if `point` is in the filled (highlighted) area.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outline_analysis::compose;
    /// use outline_geometry::{Point2, Polygon, Rect};
    ///
    /// let hull = Polygon::new(vec![
    ///     Point2::new(10.0, 10.0),
    ///     Point2::new(20.0, 10.0),
    ///     Point2::new(20.0, 20.0),
    ///     Point2::new(10.0, 20.0),
    /// ]);
    /// let region = compose(Rect::from_size(100.0, 100.0), &[hull]);
    /// assert!(region.contains(Point2::new(50.0, 50.0)));
    /// assert!(!region.contains(Point2::new(15.0, 15.0)));
    /// ```
    pub fn contains(&self, point: Point2) -> bool {
        match self.fill_rule {
            FillRule::EvenOdd => {
                let crossings = self.subpaths.iter().filter(|p| p.contains(point)).count();
                crossings % 2 == 1
            }
            FillRule::NonZero => {
                let winding: i32 = self.subpaths.iter().map(|p| p.winding_number(point)).sum();
                winding != 0
            }
        }
    }
}

/// Builds the highlight region: `bounds` minus every hull.
///
/// Degenerate hulls (fewer than two vertices) have nothing to draw and are
/// left out.
pub fn compose(bounds: Rect, hulls: &[Polygon]) -> CompositeRegion {
    let mut subpaths = Vec::with_capacity(hulls.len() + 1);
    subpaths.push(bounds.to_polygon());
    subpaths.extend(
        hulls
            .iter()
            .filter(|hull| !hull.is_degenerate())
            .map(Polygon::reversed),
    );
    CompositeRegion {
        subpaths,
        fill_rule: FillRule::EvenOdd,
    }
}
