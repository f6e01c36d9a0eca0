//! # Error Types
//!
//! Structured error types for calc_core. A failed solve carries enough
//! context to show the user a direct message and to let a program react
//! to the specific geometric problem.
//!
//! "Incomplete input" (a required field not yet filled in) is deliberately
//! *not* an error: the pipeline simply returns no result in that case.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::errors::{SolveError, SolveResult};
//! use calc_core::pattern::Field;
//!
//! fn check_side(value: f64) -> SolveResult<f64> {
//!     if value <= 0.0 {
//!         return Err(SolveError::non_positive_side(Field::SideA, value));
//!     }
//!     Ok(value)
//! }
//!
//! let err = check_side(-1.0).unwrap_err();
//! assert_eq!(err.error_code(), "NON_POSITIVE_SIDE");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::pattern::Field;

/// Result type alias for solver operations
pub type SolveResult<T> = Result<T, SolveError>;

/// Reasons a triangle could not be solved.
///
/// Checks run in a fixed order and the first violation is reported.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum SolveError {
    /// A side length is zero or negative
    #[error("{} must be a positive length (got {value})", .field.label())]
    NonPositiveSide { field: Field, value: f64 },

    /// An angle is outside the open interval (0°, 180°)
    #[error("{} must be between 0 and 180 degrees (got {value})", .field.label())]
    InvalidAngleRange { field: Field, value: f64 },

    /// Three sides that cannot close into a triangle
    #[error("The sides {a}, {b} and {c} do not form a valid triangle (triangle inequality violated)")]
    TriangleInequalityViolated { a: f64, b: f64, c: f64 },

    /// The two given angles leave no room for the third
    #[error("Sum of Angle A and Angle B must be less than 180 degrees (got {sum})")]
    AngleSumExceeded { sum: f64 },

    /// The sine used as a Law of Sines divisor is numerically zero
    #[error("{} is too close to 0 or 180 degrees, cannot form a triangle", .angle.label())]
    DegenerateTriangle { angle: Field },

    /// Heron's formula produced a non-positive or non-finite area
    #[error("Calculated values result in an invalid triangle (area {area}). Check input consistency")]
    InvalidTriangleGeometry { area: f64 },
}

impl SolveError {
    /// Create a NonPositiveSide error
    pub fn non_positive_side(field: Field, value: f64) -> Self {
        SolveError::NonPositiveSide { field, value }
    }

    /// Create an InvalidAngleRange error
    pub fn invalid_angle(field: Field, value: f64) -> Self {
        SolveError::InvalidAngleRange { field, value }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            SolveError::NonPositiveSide { .. } => "NON_POSITIVE_SIDE",
            SolveError::InvalidAngleRange { .. } => "INVALID_ANGLE_RANGE",
            SolveError::TriangleInequalityViolated { .. } => "TRIANGLE_INEQUALITY_VIOLATED",
            SolveError::AngleSumExceeded { .. } => "ANGLE_SUM_EXCEEDED",
            SolveError::DegenerateTriangle { .. } => "DEGENERATE_TRIANGLE",
            SolveError::InvalidTriangleGeometry { .. } => "INVALID_TRIANGLE_GEOMETRY",
        }
    }
}

/// A raw field value that could not be read as a number.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseFieldError {
    #[error("field is empty")]
    Empty,

    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error("value {0} is not finite")]
    NotFinite(f64),
}

/// Unknown congruence pattern name
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Unknown input pattern '{0}' (expected SSS, SAS, ASA or AAS)")]
pub struct ParsePatternError(pub String);

/// Unknown linear unit name
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Unknown unit '{0}' (expected m, cm, ft or in)")]
pub struct ParseUnitError(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = SolveError::non_positive_side(Field::SideA, -5.0);
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"NonPositiveSide\""));
        let roundtrip: SolveError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            SolveError::invalid_angle(Field::AngleB, 190.0).error_code(),
            "INVALID_ANGLE_RANGE"
        );
        assert_eq!(
            SolveError::DegenerateTriangle { angle: Field::AngleC }.error_code(),
            "DEGENERATE_TRIANGLE"
        );
    }

    #[test]
    fn test_messages_name_the_field() {
        let msg = SolveError::non_positive_side(Field::SideC, 0.0).to_string();
        assert!(msg.starts_with("Side c"));

        let msg = SolveError::DegenerateTriangle { angle: Field::AngleA }.to_string();
        assert!(msg.starts_with("Angle A"));
    }
}
