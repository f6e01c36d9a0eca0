//! # Input Normalizer
//!
//! Turns raw user-facing field values into a [`CanonicalInput`]: the three
//! values the active pattern needs, sides in meters and angles in degrees.
//!
//! A required field that is missing or does not parse makes the input
//! *incomplete*. That is reported as `None`, not as an error, so a form can
//! stay quiet while the user is still typing.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::normalize::{normalize, TriangleFields};
//! use calc_core::pattern::{CongruencePattern, Field};
//! use calc_core::units::LinearUnit;
//!
//! let fields = TriangleFields::new()
//!     .with(Field::SideA, "3")
//!     .with(Field::SideB, 4.0)
//!     .with(Field::SideC, "5");
//!
//! let input = normalize(CongruencePattern::Sss, &fields, LinearUnit::Foot).unwrap();
//! assert!((input.value(Field::SideA).unwrap() - 0.9144).abs() < 1e-12);
//!
//! // Angle B is not filled in yet: no result, no error
//! let partial = TriangleFields::new().with(Field::SideA, "3").with(Field::SideC, "5");
//! assert!(normalize(CongruencePattern::Sas, &partial, LinearUnit::Meter).is_none());
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::ParseFieldError;
use crate::pattern::{CongruencePattern, Field};
use crate::units::LinearUnit;

/// A field value as entered: either already numeric or free text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Text(String),
}

impl From<f64> for RawValue {
    fn from(v: f64) -> Self {
        RawValue::Number(v)
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue::Text(s.to_string())
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        RawValue::Text(s)
    }
}

/// Raw values for the six measurements, any of which may be absent.
///
/// ## JSON Example
///
/// ```json
/// { "sideA": "3", "angleB": 90, "sideC": 4 }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriangleFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub side_a: Option<RawValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub side_b: Option<RawValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub side_c: Option<RawValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub angle_a: Option<RawValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub angle_b: Option<RawValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub angle_c: Option<RawValue>,
}

impl TriangleFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter
    pub fn with(mut self, field: Field, value: impl Into<RawValue>) -> Self {
        self.set(field, value);
        self
    }

    pub fn set(&mut self, field: Field, value: impl Into<RawValue>) {
        *self.slot_mut(field) = Some(value.into());
    }

    pub fn clear(&mut self, field: Field) {
        *self.slot_mut(field) = None;
    }

    pub fn get(&self, field: Field) -> Option<&RawValue> {
        match field {
            Field::SideA => self.side_a.as_ref(),
            Field::SideB => self.side_b.as_ref(),
            Field::SideC => self.side_c.as_ref(),
            Field::AngleA => self.angle_a.as_ref(),
            Field::AngleB => self.angle_b.as_ref(),
            Field::AngleC => self.angle_c.as_ref(),
        }
    }

    /// Clear every field the given pattern does not read.
    ///
    /// Used when the user switches pattern: values that are still relevant
    /// survive, the others are dropped.
    pub fn retain_for(&mut self, pattern: CongruencePattern) {
        for field in Field::ALL {
            if !pattern.reads(field) {
                self.clear(field);
            }
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut Option<RawValue> {
        match field {
            Field::SideA => &mut self.side_a,
            Field::SideB => &mut self.side_b,
            Field::SideC => &mut self.side_c,
            Field::AngleA => &mut self.angle_a,
            Field::AngleB => &mut self.angle_b,
            Field::AngleC => &mut self.angle_c,
        }
    }
}

/// The pattern's three required values, in the base unit.
///
/// Only [`normalize`] and [`CanonicalInput::from_base_values`] build one, so
/// every value the pattern needs is always present.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanonicalInput {
    pattern: CongruencePattern,
    /// Values in `pattern.required_fields()` order (meters / degrees)
    values: [f64; 3],
}

impl CanonicalInput {
    /// Build from values already in meters/degrees, given in
    /// `pattern.required_fields()` order.
    pub fn from_base_values(pattern: CongruencePattern, values: [f64; 3]) -> Self {
        Self { pattern, values }
    }

    pub fn pattern(&self) -> CongruencePattern {
        self.pattern
    }

    /// The value of `field`, if the pattern supplies it
    pub fn value(&self, field: Field) -> Option<f64> {
        self.pattern
            .required_fields()
            .iter()
            .position(|f| *f == field)
            .map(|i| self.values[i])
    }

    /// Supplied sides [a, b, c] in meters
    pub fn sides(&self) -> [Option<f64>; 3] {
        [
            self.value(Field::SideA),
            self.value(Field::SideB),
            self.value(Field::SideC),
        ]
    }

    /// Supplied angles [A, B, C] in degrees
    pub fn angles(&self) -> [Option<f64>; 3] {
        [
            self.value(Field::AngleA),
            self.value(Field::AngleB),
            self.value(Field::AngleC),
        ]
    }
}

/// Parse one raw value.
///
/// Text follows leading-number rules: surrounding whitespace is ignored and
/// the longest numeric prefix is used, so `"12.5 ft"` reads as 12.5.
pub fn parse_field(raw: &RawValue) -> Result<f64, ParseFieldError> {
    let value = match raw {
        RawValue::Number(v) => *v,
        RawValue::Text(s) => {
            let s = s.trim();
            if s.is_empty() {
                return Err(ParseFieldError::Empty);
            }
            let prefix = numeric_prefix(s);
            if prefix.is_empty() {
                return Err(ParseFieldError::NotANumber(s.to_string()));
            }
            prefix
                .parse::<f64>()
                .map_err(|_| ParseFieldError::NotANumber(s.to_string()))?
        }
    };

    if !value.is_finite() {
        return Err(ParseFieldError::NotFinite(value));
    }
    Ok(value)
}

/// Longest prefix of `s` shaped like `[+-]digits[.digits][(e|E)[+-]digits]`.
fn numeric_prefix(s: &str) -> &str {
    let bytes = s.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        i += 1;
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut digits = i - int_start;

    if i < bytes.len() && bytes[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        digits += j - frac_start;
        i = j;
    }

    if digits == 0 {
        return "";
    }

    // Exponent only counts if at least one digit follows
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    // A trailing '.' ("5.") is accepted by f64::from_str
    &s[..i]
}

/// Required fields of `pattern` that are absent or do not parse.
pub fn missing_fields(pattern: CongruencePattern, fields: &TriangleFields) -> Vec<Field> {
    pattern
        .required_fields()
        .into_iter()
        .filter(|f| fields.get(*f).map(parse_field).and_then(Result::ok).is_none())
        .collect()
}

/// Read the pattern's required fields and convert sides to meters.
///
/// Returns `None` when any required field is missing or unparsable.
pub fn normalize(
    pattern: CongruencePattern,
    fields: &TriangleFields,
    unit: LinearUnit,
) -> Option<CanonicalInput> {
    let mut values = [0.0; 3];
    for (slot, field) in values.iter_mut().zip(pattern.required_fields()) {
        let raw = fields.get(field)?;
        let value = match parse_field(raw) {
            Ok(v) => v,
            Err(e) => {
                log::debug!("{} incomplete: {} {}", pattern, field, e);
                return None;
            }
        };
        *slot = if field.is_angle() {
            value
        } else {
            unit.to_base(value)
        };
    }

    let input = CanonicalInput::from_base_values(pattern, values);
    log::debug!("normalized {} input ({}): {:?}", pattern, unit, input.values);
    Some(input)
}
