//! # Error Types
//!
//! Error types for geometry kernel operations.

use thiserror::Error;

/// Errors that can occur in the geometry kernel.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum GeometryError {
    /// A direction vector had zero length and could not be normalized.
    ///
    /// Typically raised when two spheres share a center.
    #[error("Degenerate vector ({x}, {y}, {z}) cannot be normalized")]
    DegenerateVector {
        /// X component
        x: f64,
        /// Y component
        y: f64,
        /// Z component
        z: f64,
    },
}

/// Result type alias for geometry operations.
pub type GeometryResult<T> = Result<T, GeometryError>;
