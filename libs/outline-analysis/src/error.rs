//! # Analysis Errors
//!
//! Error types for the analysis stages.
//!
//! ## Recovery Policy
//!
//! - `InvalidParameter` is fatal at construction and never retried
//! - `DegenerateVector` skips the affected surface pair for one evaluation
//! - `InvalidSurface` excludes the surface from one evaluation
//!
//! Clustering and hull building never fail on well-typed input.

use config::constants::ConfigError;
use outline_geometry::GeometryError;
use thiserror::Error;

use crate::surface::SurfaceId;

/// Errors that can occur during spatial analysis.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AnalysisError {
    /// Bad configuration value.
    #[error("Invalid parameter: {message}")]
    InvalidParameter {
        /// What was wrong
        message: String,
    },

    /// Zero-length direction vector from the geometry kernel.
    #[error(transparent)]
    DegenerateVector(#[from] GeometryError),

    /// Surface with a non-positive radius or non-finite center.
    #[error("Invalid surface {id}: {message}")]
    InvalidSurface {
        /// Offending surface
        id: SurfaceId,
        /// What was wrong
        message: String,
    },
}

impl AnalysisError {
    /// Creates an invalid parameter error.
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }

    /// Creates an invalid surface error.
    pub fn invalid_surface(id: SurfaceId, message: impl Into<String>) -> Self {
        Self::InvalidSurface {
            id,
            message: message.into(),
        }
    }
}

impl From<ConfigError> for AnalysisError {
    fn from(err: ConfigError) -> Self {
        Self::invalid_parameter(err.to_string())
    }
}

/// Result type alias for analysis operations.
pub type AnalysisResult<T> = Result<T, AnalysisError>;
