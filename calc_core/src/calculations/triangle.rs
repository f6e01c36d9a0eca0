//! # Triangle Result
//!
//! The immutable value a solve produces: all three sides and angles plus the
//! derived perimeter, area, altitudes and classification.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "sides": { "a": 3.0, "b": 4.0, "c": 5.0 },
//!   "angles": { "A": 36.87, "B": 53.13, "C": 90.0 },
//!   "perimeter": 12.0,
//!   "area": 6.0,
//!   "altitudes": { "ha": 4.0, "hb": 3.0, "hc": 2.4 },
//!   "classification": { "angle_type": "Right", "side_type": "Scalene" },
//!   "unit": "ft"
//! }
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::units::LinearUnit;

/// Side lengths; side `a` is opposite angle `A`, and so on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sides {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Sides {
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    pub fn to_array(self) -> [f64; 3] {
        [self.a, self.b, self.c]
    }

    pub fn sum(self) -> f64 {
        self.a + self.b + self.c
    }

    /// Apply `f` to every side
    pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self::new(f(self.a), f(self.b), f(self.c))
    }
}

/// Interior angles in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Angles {
    #[serde(rename = "A")]
    pub a: f64,
    #[serde(rename = "B")]
    pub b: f64,
    #[serde(rename = "C")]
    pub c: f64,
}

impl Angles {
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    pub fn to_array(self) -> [f64; 3] {
        [self.a, self.b, self.c]
    }

    pub fn sum(self) -> f64 {
        self.a + self.b + self.c
    }
}

/// Altitudes: `ha` is the height dropped onto side `a`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Altitudes {
    pub ha: f64,
    pub hb: f64,
    pub hc: f64,
}

impl Altitudes {
    /// h_x = 2 * area / x
    pub fn from_area(area: f64, sides: Sides) -> Self {
        Self {
            ha: 2.0 * area / sides.a,
            hb: 2.0 * area / sides.b,
            hc: 2.0 * area / sides.c,
        }
    }
}

/// Classification by largest angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AngleType {
    Acute,
    Right,
    Obtuse,
    Invalid,
}

/// Classification by equal sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SideType {
    Equilateral,
    Isosceles,
    Scalene,
    Invalid,
}

impl fmt::Display for AngleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AngleType::Acute => "Acute",
            AngleType::Right => "Right",
            AngleType::Obtuse => "Obtuse",
            AngleType::Invalid => "Invalid",
        };
        f.write_str(s)
    }
}

impl fmt::Display for SideType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SideType::Equilateral => "Equilateral",
            SideType::Isosceles => "Isosceles",
            SideType::Scalene => "Scalene",
            SideType::Invalid => "Invalid",
        };
        f.write_str(s)
    }
}

/// Angle-based and side-based type labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub angle_type: AngleType,
    pub side_type: SideType,
}

impl Classification {
    pub const INVALID: Classification = Classification {
        angle_type: AngleType::Invalid,
        side_type: SideType::Invalid,
    };

    pub fn is_valid(&self) -> bool {
        self.angle_type != AngleType::Invalid && self.side_type != SideType::Invalid
    }

    /// "Right Scalene", "Acute Equilateral", or "Invalid Triangle"
    pub fn label(&self) -> String {
        if !self.is_valid() {
            return "Invalid Triangle".to_string();
        }
        format!("{} {}", self.angle_type, self.side_type)
    }
}

/// A fully solved triangle.
///
/// Sides, perimeter and altitudes are in `unit`, area in `unit`², angles
/// in degrees. Built fresh by every solve and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    pub sides: Sides,
    pub angles: Angles,
    pub perimeter: f64,
    pub area: f64,
    pub altitudes: Altitudes,
    pub classification: Classification,
    pub unit: LinearUnit,
}

impl Triangle {
    pub fn semi_perimeter(&self) -> f64 {
        self.perimeter / 2.0
    }

    /// Human-readable type, e.g. "Obtuse Isosceles"
    pub fn type_label(&self) -> String {
        self.classification.label()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_altitudes_from_area() {
        let h = Altitudes::from_area(6.0, Sides::new(3.0, 4.0, 5.0));
        assert_eq!(h.ha, 4.0);
        assert_eq!(h.hb, 3.0);
        assert!((h.hc - 2.4).abs() < 1e-12);
    }

    #[test]
    fn test_classification_label() {
        let c = Classification {
            angle_type: AngleType::Right,
            side_type: SideType::Scalene,
        };
        assert_eq!(c.label(), "Right Scalene");
        assert_eq!(Classification::INVALID.label(), "Invalid Triangle");
    }

    #[test]
    fn test_angles_serialize_uppercase() {
        let json = serde_json::to_string(&Angles::new(30.0, 60.0, 90.0)).unwrap();
        assert_eq!(json, r#"{"A":30.0,"B":60.0,"C":90.0}"#);
    }
}
