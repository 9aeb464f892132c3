//! # Point Set Operations
//!
//! Density clustering and convex hulls over screen-space points.

pub mod cluster;
pub mod hull;
