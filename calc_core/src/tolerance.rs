//! # Tolerances
//!
//! Named floating-point tolerances shared by the solver and classifier.
//!
//! Two kinds of comparison are used:
//!
//! - **Absolute** for quantities with a fixed scale: angle sums in degrees,
//!   sines, the triangle-inequality slack and the minimum area.
//! - **Relative** for side-length equality, since side magnitudes depend on
//!   the unit and on the size of the triangle.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::tolerance::Tolerance;
//!
//! let tol = Tolerance::default();
//! assert!(tol.sides_equal(1000.0, 1000.0 + 1e-8));
//! assert!(!tol.sides_equal(1.0, 1.001));
//! ```

use serde::{Deserialize, Serialize};

/// Tolerance settings for a solve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tolerance {
    /// Absolute slack for the triangle inequality, near-zero sines, the
    /// minimum area and the angle-sum check (degrees)
    pub absolute: f64,

    /// Relative factor for side equality: |x - y| < relative * max(x, y, 1)
    pub relative: f64,

    /// Distance from 90° (degrees) within which an angle counts as right
    pub right_angle: f64,
}

impl Tolerance {
    pub const DEFAULT_ABSOLUTE: f64 = 1e-9;
    pub const DEFAULT_RELATIVE: f64 = 1e-9;
    pub const DEFAULT_RIGHT_ANGLE: f64 = 1e-9;

    pub fn new(absolute: f64, relative: f64, right_angle: f64) -> Self {
        Self {
            absolute,
            relative,
            right_angle,
        }
    }

    /// True if `v` is zero within the absolute tolerance
    pub fn is_zero(self, v: f64) -> bool {
        v.abs() < self.absolute
    }

    /// Side-length equality using the relative tolerance
    pub fn sides_equal(self, x: f64, y: f64) -> bool {
        (x - y).abs() < self.relative * x.max(y).max(1.0)
    }

    /// True if `degrees` is within `right_angle` of 90°
    pub fn is_right(self, degrees: f64) -> bool {
        (degrees - 90.0).abs() < self.right_angle
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            absolute: Self::DEFAULT_ABSOLUTE,
            relative: Self::DEFAULT_RELATIVE,
            right_angle: Self::DEFAULT_RIGHT_ANGLE,
        }
    }
}
