//! Core value types for the geometry kernel.
//!
//! Includes the point aliases (`Point2`, `Point3`) and bounding spheres.

pub mod sphere;
pub mod vec2;
pub mod vec3;
