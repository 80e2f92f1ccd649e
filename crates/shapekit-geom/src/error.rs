//! Error handling for ShapeKit geometry.
//!
//! Every fallible operation in this crate fails in one of three ways:
//! - a dimension that must be positive is not (`InvalidDimension`),
//! - a shape's defining geometry is inconsistent (`InvalidGeometry`),
//! - a scale factor is non-positive (`InvalidScaleFactor`).
//!
//! All error types use `thiserror` for ergonomic error handling. Failures
//! are raised before any mutation takes place: a rejected constructor
//! produces no value and a rejected `scale` leaves the shape untouched.

use thiserror::Error;

/// Geometry error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeomError {
    /// A length-like parameter was zero or negative
    #[error("Invalid dimension: {name} must be positive, got {value}")]
    InvalidDimension {
        /// Which dimension was rejected (e.g. "width", "inner radius").
        name: &'static str,
        /// The offending value.
        value: f64,
    },

    /// A shape's defining parameters are mutually inconsistent
    #[error("Invalid geometry: {reason}")]
    InvalidGeometry {
        /// A description of the inconsistency.
        reason: String,
    },

    /// A scale factor outside (0, inf) was supplied
    #[error("Invalid scale factor: {factor} (must be positive)")]
    InvalidScaleFactor {
        /// The offending factor.
        factor: f64,
    },
}

/// Result type using GeomError
pub type Result<T> = std::result::Result<T, GeomError>;
