//! # Outline Geometry
//!
//! Geometry kernel for the surface outline pipeline. Everything here is a
//! plain value: points, spheres, polygons and rectangles, plus the handful of
//! vector operations the analysis stages need.
//!
//! ## Architecture
//!
//! ```text
//! external vectors → Point3 → project → Point2 → analysis (clusters, hulls)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use outline_geometry::{distance3, outline_point, Point3};
//!
//! let a = Point3::new(0.0, 0.0, 0.0);
//! let b = Point3::new(4.0, 0.0, 0.0);
//! assert_eq!(distance3(a, b), 4.0);
//!
//! let facing = outline_point(a, b, 1.0).unwrap();
//! assert_eq!(facing, Point3::new(1.0, 0.0, 0.0));
//! ```

pub mod core;
pub mod error;
pub mod polygon;
pub mod projection;
pub mod rect;

pub use crate::core::sphere::Sphere;
pub use crate::core::vec2::{distance2, Point2};
pub use crate::core::vec3::{distance3, normalize, outline_point, Point3};
pub use error::{GeometryError, GeometryResult};
pub use polygon::Polygon;
pub use projection::{project, project_all, Projector};
pub use rect::Rect;
