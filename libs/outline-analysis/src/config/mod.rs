//! Pipeline-level configuration building on the shared `config` crate.
//!
//! Values are validated once, when the configuration is built; a pipeline
//! never sees an invalid configuration.

use config::constants::ClusterConfig;
use outline_geometry::Rect;
use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, AnalysisResult};

/// What the per-frame analysis looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Mode {
    /// Cluster raw feature points and outline each cluster.
    #[default]
    FeatureTracking,
    /// Outline the active detected surface and place markers between surfaces.
    SurfaceDetection,
}

/// Configuration of a [`crate::SpatialPipeline`].
///
/// # Examples
/// ```
/// use outline_analysis::{AnalysisConfig, Mode};
///
/// let cfg = AnalysisConfig::for_screen(390.0, 844.0)
///     .unwrap()
///     .with_mode(Mode::SurfaceDetection)
///     .with_markers(true);
/// assert_eq!(cfg.cluster.min_points, 8);
/// assert!(cfg.show_markers);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalysisConfig {
    /// Density clustering parameters.
    pub cluster: ClusterConfig,
    /// Screen-space bounds of the highlight overlay.
    pub bounds: Rect,
    /// Initial analysis mode.
    pub mode: Mode,
    /// Whether surface events re-evaluate marker placement.
    pub show_markers: bool,
}

impl AnalysisConfig {
    /// Builds a configuration from explicit clustering parameters and bounds.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` if the clustering parameters or the bounds are
    /// invalid.
    pub fn new(cluster: ClusterConfig, bounds: Rect) -> AnalysisResult<Self> {
        let cluster = ClusterConfig::new(cluster.radius, cluster.min_points)?;
        if !bounds.is_valid() {
            return Err(AnalysisError::invalid_parameter(format!(
                "display bounds must have positive size: {}x{}",
                bounds.size.x, bounds.size.y
            )));
        }
        Ok(Self {
            cluster,
            bounds,
            mode: Mode::default(),
            show_markers: false,
        })
    }

    /// Default clustering parameters over a screen of the given size.
    pub fn for_screen(width: f64, height: f64) -> AnalysisResult<Self> {
        Self::new(ClusterConfig::default(), Rect::from_size(width, height))
    }

    /// Sets the initial mode.
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Enables or disables marker placement.
    pub fn with_markers(mut self, show_markers: bool) -> Self {
        self.show_markers = show_markers;
        self
    }
}
