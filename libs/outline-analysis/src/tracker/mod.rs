//! # Surface Boundary Tracker
//!
//! Accumulates streamed boundary vertices per surface and keeps a single
//! "active" outline for display.
//!
//! ## Policy
//!
//! - A surface's entry is created by its first non-empty batch and then only
//!   grows by append. Vertices are never replaced or deduplicated.
//! - Every update overwrites the active outline with the updated surface's
//!   full accumulated list. Whichever surface reported last wins; there is no
//!   focus or proximity heuristic.
//! - Entries are dropped only when the tracking subsystem reports the surface
//!   lost. Dropping an entry leaves the active outline untouched.


use std::collections::HashMap;

use outline_geometry::Point3;
use tracing::trace;

use crate::surface::SurfaceId;

/// Owner of every surface's accumulated boundary and of the active outline.
#[derive(Debug, Default)]
pub struct BoundaryTracker {
    registry: HashMap<SurfaceId, Vec<Point3>>,
    active: Vec<Point3>,
    active_id: Option<SurfaceId>,
}

impl BoundaryTracker {
    /// Creates an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a batch of boundary vertices for `id` and makes that surface's
    /// full accumulated boundary the active outline.
    ///
    /// An empty batch for a surface that has never reported vertices is
    /// ignored: there is nothing to track or display yet.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outline_analysis::{BoundaryTracker, SurfaceId};
    /// use outline_geometry::Point3;
    ///
    /// let mut tracker = BoundaryTracker::new();
    /// tracker.record_boundary(SurfaceId::new(1), [Point3::X, Point3::Y]);
    /// tracker.record_boundary(SurfaceId::new(1), [Point3::Z]);
    /// assert_eq!(tracker.active_outline(), &[Point3::X, Point3::Y, Point3::Z]);
    /// ```
    pub fn record_boundary<I>(&mut self, id: SurfaceId, vertices: I)
    where
        I: IntoIterator<Item = Point3>,
    {
        let mut vertices = vertices.into_iter().peekable();
        if vertices.peek().is_none() && !self.registry.contains_key(&id) {
            return;
        }

        let accumulated = self.registry.entry(id).or_default();
        accumulated.extend(vertices);

        trace!(surface = %id, vertices = accumulated.len(), "boundary recorded");
        self.active.clone_from(accumulated);
        self.active_id = Some(id);
    }

    /// Snapshot of the active outline; empty until a boundary is recorded.
    pub fn active_outline(&self) -> &[Point3] {
        &self.active
    }

    /// Surface whose boundary is currently active.
    pub fn active_surface(&self) -> Option<SurfaceId> {
        self.active_id
    }

    /// Accumulated boundary for one surface.
    pub fn boundary(&self, id: SurfaceId) -> Option<&[Point3]> {
        self.registry.get(&id).map(Vec::as_slice)
    }

    /// Returns true if `id` has a registry entry.
    pub fn is_tracked(&self, id: SurfaceId) -> bool {
        self.registry.contains_key(&id)
    }

    /// Number of tracked surfaces.
    pub fn surface_count(&self) -> usize {
        self.registry.len()
    }

    /// Drops the registry entry of a surface that lost tracking.
    ///
    /// Returns the dropped boundary, if any.
    pub fn remove_surface(&mut self, id: SurfaceId) -> Option<Vec<Point3>> {
        let removed = self.registry.remove(&id);
        if removed.is_some() {
            trace!(surface = %id, "surface dropped");
        }
        removed
    }

    /// Clears all state, as when the tracking session restarts.
    pub fn reset(&mut self) {
        self.registry.clear();
        self.active.clear();
        self.active_id = None;
    }
}
