//! # Congruence Patterns
//!
//! Which three of the six measurements (three sides, three angles) the
//! caller supplies. Each pattern reads exactly three fields; the rest are
//! ignored.
//!
//! | Pattern | Fields read                 |
//! |---------|-----------------------------|
//! | SSS     | sideA, sideB, sideC         |
//! | SAS     | sideA, angleB, sideC        |
//! | ASA     | angleA, sideC, angleB       |
//! | AAS     | angleA, angleB, sideA       |
//!
//! Side X is always opposite angle X.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ParsePatternError;

/// One of the six triangle measurements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    SideA,
    SideB,
    SideC,
    AngleA,
    AngleB,
    AngleC,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::SideA,
        Field::SideB,
        Field::SideC,
        Field::AngleA,
        Field::AngleB,
        Field::AngleC,
    ];

    /// Wire/form key ("sideA", "angleB", ...)
    pub fn key(self) -> &'static str {
        match self {
            Field::SideA => "sideA",
            Field::SideB => "sideB",
            Field::SideC => "sideC",
            Field::AngleA => "angleA",
            Field::AngleB => "angleB",
            Field::AngleC => "angleC",
        }
    }

    /// Display label ("Side a", "Angle B", ...)
    pub fn label(self) -> &'static str {
        match self {
            Field::SideA => "Side a",
            Field::SideB => "Side b",
            Field::SideC => "Side c",
            Field::AngleA => "Angle A",
            Field::AngleB => "Angle B",
            Field::AngleC => "Angle C",
        }
    }

    /// Tooltip text describing the measurement
    pub fn description(self) -> &'static str {
        match self {
            Field::SideA => "Length of side opposite Angle A.",
            Field::SideB => "Length of side opposite Angle B.",
            Field::SideC => "Length of side opposite Angle C.",
            Field::AngleA => "Measure of angle A, opposite Side a.",
            Field::AngleB => "Measure of angle B, opposite Side b.",
            Field::AngleC => "Measure of angle C, opposite Side c.",
        }
    }

    pub fn is_angle(self) -> bool {
        matches!(self, Field::AngleA | Field::AngleB | Field::AngleC)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Classical congruence pattern selecting the known measurements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CongruencePattern {
    /// Three sides
    #[default]
    Sss,
    /// Two sides and the included angle
    Sas,
    /// Two angles and the included side
    Asa,
    /// Two angles and a non-included side
    Aas,
}

impl CongruencePattern {
    pub const ALL: [CongruencePattern; 4] = [
        CongruencePattern::Sss,
        CongruencePattern::Sas,
        CongruencePattern::Asa,
        CongruencePattern::Aas,
    ];

    /// The three fields this pattern reads, in entry order
    pub fn required_fields(self) -> [Field; 3] {
        match self {
            CongruencePattern::Sss => [Field::SideA, Field::SideB, Field::SideC],
            CongruencePattern::Sas => [Field::SideA, Field::AngleB, Field::SideC],
            CongruencePattern::Asa => [Field::AngleA, Field::SideC, Field::AngleB],
            CongruencePattern::Aas => [Field::AngleA, Field::AngleB, Field::SideA],
        }
    }

    pub fn reads(self, field: Field) -> bool {
        self.required_fields().contains(&field)
    }

    /// Short code ("SSS", ...)
    pub fn code(self) -> &'static str {
        match self {
            CongruencePattern::Sss => "SSS",
            CongruencePattern::Sas => "SAS",
            CongruencePattern::Asa => "ASA",
            CongruencePattern::Aas => "AAS",
        }
    }

    /// Menu label ("SSS (Side-Side-Side)", ...)
    pub fn label(self) -> &'static str {
        match self {
            CongruencePattern::Sss => "SSS (Side-Side-Side)",
            CongruencePattern::Sas => "SAS (Side-Angle-Side)",
            CongruencePattern::Asa => "ASA (Angle-Side-Angle)",
            CongruencePattern::Aas => "AAS (Angle-Angle-Side)",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            CongruencePattern::Sss => "All three sides are known.",
            CongruencePattern::Sas => "Sides a and c and the angle B between them are known.",
            CongruencePattern::Asa => "Angles A and B and the side c between them are known.",
            CongruencePattern::Aas => "Angles A and B and side a, opposite angle A, are known.",
        }
    }
}

impl fmt::Display for CongruencePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for CongruencePattern {
    type Err = ParsePatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "SSS" => Ok(CongruencePattern::Sss),
            "SAS" => Ok(CongruencePattern::Sas),
            "ASA" => Ok(CongruencePattern::Asa),
            "AAS" => Ok(CongruencePattern::Aas),
            _ => Err(ParsePatternError(s.to_string())),
        }
    }
}
