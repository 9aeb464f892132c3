//! # Marker Placement
//!
//! Computes candidate "meeting points" between pairs of surfaces and keeps
//! the ones not enclosed by any surface's bounding sphere.
//!
//! ## Algorithm
//!
//! For every ordered pair `(A, B)` with `A != B`, in nested input order:
//! 1. Take the point on A's sphere facing B and the point on B's sphere facing A
//! 2. The candidate is their midpoint, which sits in the gap between the
//!    two surfaces rather than between their centers
//! 3. Discard the candidate if it lies within or on any surface's sphere
//!
//! Both `(A, B)` and `(B, A)` are evaluated and reported; nothing is
//! deduplicated.
//!
//! ## Recovery
//!
//! - Invalid surfaces (non-positive radius, non-finite center) are excluded
//!   from the evaluation, both as pair members and as enclosing spheres
//! - A pair with coincident centers has no facing direction and is skipped


use config::constants::MARKER_VISUAL_RADIUS;
use outline_geometry::{Point3, Sphere};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{AnalysisError, AnalysisResult};
use crate::surface::{Surface, SurfaceId};

/// A surviving meeting point between two surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerCandidate {
    /// World-space marker position.
    pub position: Point3,
    /// The ordered `(from, to)` pair that produced the candidate.
    pub source_pair: (SurfaceId, SurfaceId),
}

impl MarkerCandidate {
    /// Sphere the scene-placement collaborator draws for this marker.
    pub fn visual_sphere(&self) -> Sphere {
        Sphere::new(self.position, MARKER_VISUAL_RADIUS)
    }
}

/// Checks that a surface can take part in marker placement.
///
/// # Errors
///
/// `InvalidSurface` for a non-positive or non-finite radius, or a non-finite
/// center.
pub fn validate_surface(surface: &Surface) -> AnalysisResult<()> {
    let Sphere { center, radius } = surface.sphere;
    if !center.is_finite() {
        return Err(AnalysisError::invalid_surface(
            surface.id,
            format!("center must be finite: {center}"),
        ));
    }
    if !radius.is_finite() || radius <= 0.0 {
        return Err(AnalysisError::invalid_surface(
            surface.id,
            format!("radius must be positive: {radius}"),
        ));
    }
    Ok(())
}

/// Midpoint between the facing outline points of two spheres.
///
/// # Errors
///
/// `DegenerateVector` when the spheres share a center.
///
/// # Examples
///
/// ```rust
/// use outline_analysis::meeting_point;
/// use outline_geometry::{Point3, Sphere};
///
/// let a = Sphere::new(Point3::ZERO, 1.0);
/// let b = Sphere::new(Point3::new(4.0, 0.0, 0.0), 1.0);
/// assert_eq!(meeting_point(&a, &b).unwrap(), Point3::new(2.0, 0.0, 0.0));
/// ```
pub fn meeting_point(from: &Sphere, to: &Sphere) -> AnalysisResult<Point3> {
    let from_outline = from.outline_towards(to.center)?;
    let to_outline = to.outline_towards(from.center)?;
    Ok((from_outline + to_outline) / 2.0)
}

/// Computes the marker candidates for one evaluation.
///
/// Fewer than two valid surfaces yield no candidates. Output order follows
/// the nested pair enumeration over `surfaces`.
pub fn place_markers(surfaces: &[Surface]) -> Vec<MarkerCandidate> {
    let valid: Vec<&Surface> = surfaces
        .iter()
        .filter(|surface| match validate_surface(surface) {
            Ok(()) => true,
            Err(err) => {
                warn!(surface = %surface.id, error = %err, "surface excluded from marker placement");
                false
            }
        })
        .collect();

    if valid.len() < 2 {
        return Vec::new();
    }

    let mut candidates = Vec::new();
    for (i, from) in valid.iter().enumerate() {
        for (j, to) in valid.iter().enumerate() {
            if i == j {
                continue;
            }
            let position = match meeting_point(&from.sphere, &to.sphere) {
                Ok(position) => position,
                Err(err) => {
                    debug!(from = %from.id, to = %to.id, error = %err, "surface pair skipped");
                    continue;
                }
            };
            if valid.iter().any(|s| s.sphere.encloses(position)) {
                continue;
            }
            candidates.push(MarkerCandidate {
                position,
                source_pair: (from.id, to.id),
            });
        }
    }

    debug!(
        surfaces = valid.len(),
        markers = candidates.len(),
        "marker placement finished"
    );
    candidates
}
