//! # Spatial Pipeline
//!
//! Per-frame orchestration of the analysis stages, driven by the host's
//! frame clock and surface events.
//!
//! ## Flow
//!
//! ```text
//! FeatureTracking:  feature points → project → cluster → hull (each) → compose
//! SurfaceDetection: active outline → project → hull → compose
//!                   surface events → surface table → place_markers
//! ```
//!
//! The pipeline is single-threaded and holds no locks. Results leave through
//! return values or a [`FrameSink`].

mod surfaces;

#[cfg(test)]
mod tests;

use outline_geometry::{project_all, Point3, Polygon, Projector, Sphere};
use tracing::{debug, trace};

use crate::compositor::{compose, CompositeRegion};
use crate::config::{AnalysisConfig, Mode};
use crate::error::AnalysisResult;
use crate::markers::{place_markers, MarkerCandidate};
use crate::ops::cluster::Dbscan;
use crate::ops::hull::convex_hull;
use crate::sink::{FrameSink, RenderUpdate};
use crate::surface::{Surface, SurfaceId};
use crate::tracker::BoundaryTracker;

use surfaces::SurfaceTable;

/// Stateful analysis session.
///
/// Owns the boundary tracker and the surface table; every other stage is
/// stateless and recomputed per call.
#[derive(Debug)]
pub struct SpatialPipeline {
    config: AnalysisConfig,
    dbscan: Dbscan,
    tracker: BoundaryTracker,
    surfaces: SurfaceTable,
    mode: Mode,
    show_markers: bool,
}

impl SpatialPipeline {
    /// Starts a session.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` if `config` was assembled by hand with invalid
    /// values.
    pub fn new(config: AnalysisConfig) -> AnalysisResult<Self> {
        let config = AnalysisConfig::new(config.cluster, config.bounds)?
            .with_mode(config.mode)
            .with_markers(config.show_markers);
        debug!(
            radius = config.cluster.radius,
            min_points = config.cluster.min_points,
            mode = ?config.mode,
            "spatial pipeline created"
        );
        Ok(Self {
            config,
            dbscan: Dbscan::new(config.cluster),
            tracker: BoundaryTracker::new(),
            surfaces: SurfaceTable::default(),
            mode: config.mode,
            show_markers: config.show_markers,
        })
    }

    /// Validated configuration the session was started with.
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Current analysis mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Switches mode and restarts the session: tracked boundaries, the active
    /// outline and the surface table are dropped.
    ///
    /// Switching to the current mode is a no-op.
    pub fn set_mode(&mut self, mode: Mode) {
        if mode == self.mode {
            return;
        }
        debug!(from = ?self.mode, to = ?mode, "mode switched; session reset");
        self.mode = mode;
        self.reset();
    }

    /// Returns true if surface events re-evaluate markers.
    pub fn show_markers(&self) -> bool {
        self.show_markers
    }

    /// Enables or disables marker placement for later surface events.
    pub fn set_show_markers(&mut self, show_markers: bool) {
        self.show_markers = show_markers;
    }

    /// Drops all session state, keeping mode and configuration.
    pub fn reset(&mut self) {
        self.tracker.reset();
        self.surfaces.clear();
    }

    /// The boundary tracker, read-only.
    pub fn tracker(&self) -> &BoundaryTracker {
        &self.tracker
    }

    /// Tracked surfaces in first-detection order.
    pub fn surfaces(&self) -> &[Surface] {
        self.surfaces.as_slice()
    }

    /// A tracked surface by id.
    pub fn surface(&self, id: SurfaceId) -> Option<&Surface> {
        self.surfaces.get(id)
    }

    /// Handles a newly detected surface.
    ///
    /// Returns the re-evaluated marker set when markers are enabled, `None`
    /// otherwise. Ignored outside [`Mode::SurfaceDetection`].
    pub fn surface_added(&mut self, id: SurfaceId, sphere: Sphere) -> Option<Vec<MarkerCandidate>> {
        if self.mode != Mode::SurfaceDetection {
            trace!(surface = %id, "surface event ignored in feature tracking");
            return None;
        }
        self.surfaces.upsert(id, sphere);
        self.refreshed_markers()
    }

    /// Handles a surface update: new bounding sphere plus a batch of boundary
    /// vertices, which become the active outline.
    ///
    /// Returns the re-evaluated marker set when markers are enabled, `None`
    /// otherwise. Ignored outside [`Mode::SurfaceDetection`].
    pub fn surface_updated(
        &mut self,
        id: SurfaceId,
        sphere: Sphere,
        boundary: &[Point3],
    ) -> Option<Vec<MarkerCandidate>> {
        if self.mode != Mode::SurfaceDetection {
            trace!(surface = %id, "surface event ignored in feature tracking");
            return None;
        }
        self.surfaces.upsert(id, sphere);
        self.tracker.record_boundary(id, boundary.iter().copied());
        self.refreshed_markers()
    }

    /// Handles loss of tracking for a surface.
    ///
    /// The active outline is left as it is until another surface reports.
    pub fn surface_removed(&mut self, id: SurfaceId) {
        let dropped = self.surfaces.remove(id).is_some();
        let boundary = self.tracker.remove_surface(id);
        if dropped || boundary.is_some() {
            debug!(surface = %id, "surface lost");
        }
    }

    /// Marker candidates for the current surface table.
    pub fn markers(&self) -> Vec<MarkerCandidate> {
        place_markers(self.surfaces.as_slice())
    }

    fn refreshed_markers(&self) -> Option<Vec<MarkerCandidate>> {
        self.show_markers.then(|| self.markers())
    }

    /// Region for one frame of raw feature points: bounds minus the hull of
    /// every dense cluster.
    pub fn feature_frame<P>(&self, feature_points: &[Point3], projector: &P) -> CompositeRegion
    where
        P: Projector + ?Sized,
    {
        let screen = project_all(feature_points, projector);
        let hulls: Vec<Polygon> = self
            .dbscan
            .clusters(&screen)
            .iter()
            .map(|cluster| convex_hull(cluster.points()))
            .collect();
        trace!(points = screen.len(), hulls = hulls.len(), "feature frame");
        compose(self.config.bounds, &hulls)
    }

    /// Region for the active surface outline: bounds minus its hull.
    pub fn surface_frame<P>(&self, projector: &P) -> CompositeRegion
    where
        P: Projector + ?Sized,
    {
        let screen = project_all(self.tracker.active_outline(), projector);
        let hull = convex_hull(&screen);
        trace!(vertices = screen.len(), hull = hull.len(), "surface frame");
        compose(self.config.bounds, &[hull])
    }

    /// Region for the current mode. Feature points are only read in
    /// [`Mode::FeatureTracking`].
    pub fn frame<P>(&self, feature_points: &[Point3], projector: &P) -> CompositeRegion
    where
        P: Projector + ?Sized,
    {
        match self.mode {
            Mode::FeatureTracking => self.feature_frame(feature_points, projector),
            Mode::SurfaceDetection => self.surface_frame(projector),
        }
    }

    /// Computes the frame region and hands it to `sink` without waiting.
    pub fn render_frame<P>(&self, feature_points: &[Point3], projector: &P, sink: &dyn FrameSink)
    where
        P: Projector + ?Sized,
    {
        sink.submit(RenderUpdate::Region(self.frame(feature_points, projector)));
    }
}
