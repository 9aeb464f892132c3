//! Surface identities and their bounding spheres.

use std::fmt;

use outline_geometry::Sphere;
use serde::{Deserialize, Serialize};

/// Opaque, stable identifier of a detected planar surface.
///
/// Issued by the external tracking subsystem (one per tracked anchor).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SurfaceId(u64);

impl SurfaceId {
    /// Wraps a raw anchor identifier.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw identifier.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for SurfaceId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A tracked surface approximated by its bounding sphere.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Surface {
    /// Surface identity.
    pub id: SurfaceId,
    /// World-space bounding sphere.
    pub sphere: Sphere,
}

impl Surface {
    /// Creates a surface entry.
    pub fn new(id: impl Into<SurfaceId>, sphere: Sphere) -> Self {
        Self {
            id: id.into(),
            sphere,
        }
    }
}
