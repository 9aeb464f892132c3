//! Centralized configuration values shared across the surface outline pipeline.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// CLUSTERING
// =============================================================================

/// Default neighborhood radius, in screen pixels, for density clustering of
/// projected feature points.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_CLUSTER_RADIUS;
/// assert_eq!(DEFAULT_CLUSTER_RADIUS, 60.0);
/// ```
pub const DEFAULT_CLUSTER_RADIUS: f64 = 60.0;

/// Default minimum number of points (the core point included) that must lie
/// within [`DEFAULT_CLUSTER_RADIUS`] for a point to seed a cluster.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_MIN_CLUSTER_POINTS;
/// assert_eq!(DEFAULT_MIN_CLUSTER_POINTS, 8);
/// ```
pub const DEFAULT_MIN_CLUSTER_POINTS: usize = 8;

// =============================================================================
// PRECISION
// =============================================================================

/// Vectors whose length is at or below this value are treated as zero length
/// and cannot be normalized.
///
/// # Examples
/// ```
/// use config::constants::DEGENERATE_LENGTH_EPSILON;
/// assert!(DEGENERATE_LENGTH_EPSILON < 1.0e-6);
/// ```
pub const DEGENERATE_LENGTH_EPSILON: f64 = 1.0e-12;

// =============================================================================
// MARKERS
// =============================================================================

/// Radius, in world units, of the visual marker the scene-placement
/// collaborator instantiates at each meeting point.
pub const MARKER_VISUAL_RADIUS: f64 = 0.05;

// =============================================================================
// VALIDATED CONFIGURATION
// =============================================================================

/// Immutable snapshot of the density clustering parameters.
///
/// # Examples
/// ```
/// use config::constants::ClusterConfig;
/// let cfg = ClusterConfig::new(25.0, 4).expect("valid config");
/// assert_eq!(cfg.min_points, 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClusterConfig {
    /// Neighborhood radius under the clustering distance function.
    pub radius: f64,
    /// Minimum neighborhood size (inclusive of the point itself) for a core point.
    pub min_points: usize,
}

impl ClusterConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// radius and density threshold.
    pub fn new(radius: f64, min_points: usize) -> Result<Self, ConfigError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(ConfigError::InvalidRadius(radius));
        }
        if min_points == 0 {
            return Err(ConfigError::InvalidMinPoints(min_points));
        }
        Ok(Self { radius, min_points })
    }
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            radius: DEFAULT_CLUSTER_RADIUS,
            min_points: DEFAULT_MIN_CLUSTER_POINTS,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Raised when the cluster radius is zero, negative or not finite.
    InvalidRadius(f64),
    /// Raised when the density threshold is zero.
    InvalidMinPoints(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidRadius(value) => {
                write!(f, "cluster radius must be positive and finite: {value}")
            }
            ConfigError::InvalidMinPoints(value) => {
                write!(f, "min_points must be >= 1: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
