//! # Unit Types
//!
//! Linear units for triangle sides and helpers for angle arithmetic.
//!
//! ## Base Unit
//!
//! All solving happens in meters. A [`LinearUnit`] carries the fixed factor
//! that converts one of its values to meters:
//!
//! | Unit       | Symbol | Meters per unit |
//! |------------|--------|-----------------|
//! | Meter      | `m`    | 1               |
//! | Centimeter | `cm`   | 0.01            |
//! | Foot       | `ft`   | 0.3048          |
//! | Inch       | `in`   | 0.0254          |
//!
//! Areas scale with the square of the factor. Angles are always degrees at
//! the interface and radians inside trig calls.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::units::LinearUnit;
//!
//! let ft = LinearUnit::Foot;
//! assert!((ft.to_base(10.0) - 3.048).abs() < 1e-12);
//! assert!((ft.from_base(3.048) - 10.0).abs() < 1e-12);
//!
//! let unit: LinearUnit = "cm".parse().unwrap();
//! assert_eq!(unit, LinearUnit::Centimeter);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ParseUnitError;

// ============================================================================
// Length Units
// ============================================================================

/// A unit for side lengths, perimeter and altitudes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LinearUnit {
    #[default]
    #[serde(rename = "m")]
    Meter,
    #[serde(rename = "cm")]
    Centimeter,
    #[serde(rename = "ft")]
    Foot,
    #[serde(rename = "in")]
    Inch,
}

impl LinearUnit {
    /// Every supported unit, in menu order
    pub const ALL: [LinearUnit; 4] = [
        LinearUnit::Meter,
        LinearUnit::Centimeter,
        LinearUnit::Foot,
        LinearUnit::Inch,
    ];

    /// Meters per one of this unit
    pub fn factor(self) -> f64 {
        match self {
            LinearUnit::Meter => 1.0,
            LinearUnit::Centimeter => 0.01,
            LinearUnit::Foot => 0.3048,
            LinearUnit::Inch => 0.0254,
        }
    }

    /// Short symbol ("m", "cm", "ft", "in")
    pub fn symbol(self) -> &'static str {
        match self {
            LinearUnit::Meter => "m",
            LinearUnit::Centimeter => "cm",
            LinearUnit::Foot => "ft",
            LinearUnit::Inch => "in",
        }
    }

    /// Human-readable name
    pub fn name(self) -> &'static str {
        match self {
            LinearUnit::Meter => "Meter",
            LinearUnit::Centimeter => "Centimeter",
            LinearUnit::Foot => "Foot",
            LinearUnit::Inch => "Inch",
        }
    }

    /// Convert a length in this unit to meters
    pub fn to_base(self, value: f64) -> f64 {
        value * self.factor()
    }

    /// Convert a length in meters to this unit
    pub fn from_base(self, meters: f64) -> f64 {
        meters / self.factor()
    }

    /// Convert an area in square meters to this unit squared
    pub fn area_from_base(self, square_meters: f64) -> f64 {
        square_meters / self.factor().powi(2)
    }
}

impl fmt::Display for LinearUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for LinearUnit {
    type Err = ParseUnitError;

    /// Accepts symbols and names, case-insensitive ("ft", "Foot", "feet").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "m" | "meter" | "meters" | "metre" | "metres" => Ok(LinearUnit::Meter),
            "cm" | "centimeter" | "centimeters" | "centimetre" | "centimetres" => {
                Ok(LinearUnit::Centimeter)
            }
            "ft" | "foot" | "feet" => Ok(LinearUnit::Foot),
            "in" | "inch" | "inches" => Ok(LinearUnit::Inch),
            _ => Err(ParseUnitError(s.to_string())),
        }
    }
}

// ============================================================================
// Angle Helpers
// ============================================================================

/// Degrees to radians
pub fn to_radians(degrees: f64) -> f64 {
    degrees * (std::f64::consts::PI / 180.0)
}

/// Radians to degrees
pub fn to_degrees(radians: f64) -> f64 {
    radians * (180.0 / std::f64::consts::PI)
}

/// Clamp into [-1, 1] so `acos`/`asin` never see floating-point overshoot.
pub fn clamp_unit(value: f64) -> f64 {
    value.clamp(-1.0, 1.0)
}

/// `acos` of a clamped argument, in degrees
pub fn acos_degrees(value: f64) -> f64 {
    to_degrees(clamp_unit(value).acos())
}

/// Sine of an angle given in degrees
pub fn sin_degrees(degrees: f64) -> f64 {
    to_radians(degrees).sin()
}

/// Cosine of an angle given in degrees
pub fn cos_degrees(degrees: f64) -> f64 {
    to_radians(degrees).cos()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    #[test]
    fn test_feet_to_meters() {
        assert!(approx_eq(LinearUnit::Foot.to_base(3.0), 0.9144, 1e-12));
        assert!(approx_eq(LinearUnit::Meter.from_base(0.9144), 0.9144, 1e-12));
        assert!(approx_eq(LinearUnit::Inch.from_base(0.3048), 12.0, 1e-12));
    }

    #[test]
    fn test_area_uses_squared_factor() {
        // 1 m² = 10,000 cm²
        assert!(approx_eq(LinearUnit::Centimeter.area_from_base(1.0), 10_000.0, 1e-6));
        // 6 ft² expressed in m² then back
        let m2 = 6.0 * 0.3048_f64.powi(2);
        assert!(approx_eq(LinearUnit::Foot.area_from_base(m2), 6.0, 1e-12));
    }

    #[test]
    fn test_parse_units() {
        assert_eq!("FT".parse::<LinearUnit>().unwrap(), LinearUnit::Foot);
        assert_eq!(" inches ".parse::<LinearUnit>().unwrap(), LinearUnit::Inch);
        assert_eq!("metre".parse::<LinearUnit>().unwrap(), LinearUnit::Meter);
        assert!("yd".parse::<LinearUnit>().is_err());
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&LinearUnit::Centimeter).unwrap();
        assert_eq!(json, "\"cm\"");

        let roundtrip: LinearUnit = serde_json::from_str("\"in\"").unwrap();
        assert_eq!(roundtrip, LinearUnit::Inch);
    }

    #[test]
    fn test_clamped_acos() {
        // Overshoot just past 1 must not produce NaN
        assert_eq!(acos_degrees(1.0 + 1e-15), 0.0);
        assert!(approx_eq(acos_degrees(-1.0 - 1e-15), 180.0, 1e-12));
        assert!(approx_eq(acos_degrees(0.5), 60.0, 1e-12));
    }

    #[test]
    fn test_degree_trig() {
        assert!(approx_eq(sin_degrees(30.0), 0.5, 1e-12));
        assert!(approx_eq(cos_degrees(60.0), 0.5, 1e-12));
        assert!(approx_eq(to_degrees(to_radians(123.4)), 123.4, 1e-12));
    }
}
