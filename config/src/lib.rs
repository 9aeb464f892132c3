//! # Config Crate
//!
//! Centralized configuration constants for the surface outline pipeline.
//! Tunable clustering parameters and numeric tolerances are defined here so
//! the geometry and analysis crates never scatter literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{ClusterConfig, DEFAULT_CLUSTER_RADIUS, DEFAULT_MIN_CLUSTER_POINTS};
//!
//! let cfg = ClusterConfig::default();
//! assert_eq!(cfg.radius, DEFAULT_CLUSTER_RADIUS);
//! assert_eq!(cfg.min_points, DEFAULT_MIN_CLUSTER_POINTS);
//!
//! // Zero density threshold is rejected up front.
//! assert!(ClusterConfig::new(60.0, 0).is_err());
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Validated Snapshots**: Configuration is checked once, at construction

pub mod constants;
