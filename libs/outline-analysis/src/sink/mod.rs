//! # Render Hand-off
//!
//! Fire-and-forget dispatch of frame results to the rendering collaborator.
//!
//! The hand-off is a single slot per result kind, not a queue: `submit`
//! overwrites whatever the renderer has not picked up yet, so stale frames
//! are discarded at once. The slot lock is only held to swap a value in or
//! out, never while rendering.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use tracing::{debug, trace};

use crate::compositor::CompositeRegion;
use crate::markers::MarkerCandidate;

/// One result handed to the renderer.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderUpdate {
    /// Outline overlay for the current frame.
    Region(CompositeRegion),
    /// Full replacement marker set.
    Markers(Vec<MarkerCandidate>),
}

/// Destination of frame results.
pub trait FrameSink {
    /// Hands `update` over without blocking. Delivery is best-effort.
    fn submit(&self, update: RenderUpdate);
}

/// Newest pending results, by kind.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PendingUpdates {
    /// Newest region, if any arrived since the last drain.
    pub region: Option<CompositeRegion>,
    /// Newest marker set, if any arrived since the last drain.
    pub markers: Option<Vec<MarkerCandidate>>,
}

/// [`FrameSink`] writing into a slot shared with a [`LatestFrame`].
///
/// Holds the slot weakly: once the renderer side is dropped, submissions are
/// logged and discarded.
#[derive(Debug, Clone)]
pub struct ChannelSink {
    slot: Weak<Mutex<PendingUpdates>>,
}

/// Renderer-side end of a [`ChannelSink`].
#[derive(Debug)]
pub struct LatestFrame {
    slot: Arc<Mutex<PendingUpdates>>,
}

fn lock(slot: &Mutex<PendingUpdates>) -> MutexGuard<'_, PendingUpdates> {
    // Poisoning is ignored: every write is a single replace.
    slot.lock().unwrap_or_else(PoisonError::into_inner)
}

impl ChannelSink {
    /// Creates a connected sink and renderer-side receiver.
    pub fn channel() -> (ChannelSink, LatestFrame) {
        let slot = Arc::new(Mutex::new(PendingUpdates::default()));
        let sink = ChannelSink {
            slot: Arc::downgrade(&slot),
        };
        (sink, LatestFrame { slot })
    }
}

impl FrameSink for ChannelSink {
    fn submit(&self, update: RenderUpdate) {
        let Some(slot) = self.slot.upgrade() else {
            debug!("renderer disconnected; frame dropped");
            return;
        };
        let mut pending = lock(&slot);
        let superseded = match update {
            RenderUpdate::Region(region) => pending.region.replace(region).is_some(),
            RenderUpdate::Markers(markers) => pending.markers.replace(markers).is_some(),
        };
        trace!(superseded, "frame dispatched");
    }
}

impl LatestFrame {
    /// Takes the newest result of each kind, leaving the slot empty.
    pub fn latest(&self) -> PendingUpdates {
        std::mem::take(&mut *lock(&self.slot))
    }
}
