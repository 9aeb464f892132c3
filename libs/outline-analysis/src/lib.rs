//! # Outline Analysis
//!
//! Spatial analysis between the AR tracking subsystem and the renderer.
//! Raw feature points and surface updates go in; outline regions and marker
//! positions come out as plain geometric values.
//!
//! ## Stages
//!
//! - **Clustering**: DBSCAN over projected feature points ([`ops::cluster`])
//! - **Hull**: monotone chain convex hull ([`ops::hull`])
//! - **Tracking**: per-surface boundary accumulation ([`tracker`])
//! - **Markers**: meeting points between surface spheres ([`markers`])
//! - **Compositing**: bounds minus hulls under a fill rule ([`compositor`])
//!
//! ## Usage
//!
//! ```rust
//! use outline_analysis::{AnalysisConfig, SpatialPipeline};
//! use outline_geometry::{Point2, Point3};
//!
//! let config = AnalysisConfig::for_screen(390.0, 844.0).unwrap();
//! let pipeline = SpatialPipeline::new(config).unwrap();
//!
//! let camera = |p: Point3| Point2::new(p.x, p.y);
//! let region = pipeline.frame(&[], &camera);
//! // No clusters: only the screen bounds remain.
//! assert_eq!(region.subpaths().len(), 1);
//! ```

pub mod compositor;
pub mod config;
pub mod error;
pub mod markers;
pub mod ops;
pub mod pipeline;
pub mod sink;
pub mod surface;
pub mod tracker;

pub use compositor::{compose, CompositeRegion, FillRule};
pub use config::{AnalysisConfig, Mode};
pub use error::{AnalysisError, AnalysisResult};
pub use markers::{meeting_point, place_markers, validate_surface, MarkerCandidate};
pub use ops::cluster::{cluster, Cluster, ClusterSet, Clustering, Dbscan};
pub use ops::hull::convex_hull;
pub use pipeline::SpatialPipeline;
pub use sink::{ChannelSink, FrameSink, LatestFrame, RenderUpdate};
pub use surface::{Surface, SurfaceId};
pub use tracker::BoundaryTracker;
