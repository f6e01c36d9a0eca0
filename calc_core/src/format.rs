//! # Display Formatting
//!
//! Helpers for presenting a solved triangle as labelled rows of text.

use crate::calculations::Triangle;

/// Decimal places used for lengths, areas and angles in [`summary_rows`]
pub const DEFAULT_PRECISION: usize = 2;

/// Round to `precision` decimals and drop trailing zeros.
///
/// `None` and NaN render as "N/A".
///
/// ```rust
/// use calc_core::format::display_value;
///
/// assert_eq!(display_value(Some(36.8698976), 2), "36.87");
/// assert_eq!(display_value(Some(90.0000000001), 2), "90");
/// assert_eq!(display_value(Some(2.5), 2), "2.5");
/// assert_eq!(display_value(None, 2), "N/A");
/// ```
pub fn display_value(value: Option<f64>, precision: usize) -> String {
    let Some(v) = value.filter(|v| !v.is_nan()) else {
        return "N/A".to_string();
    };

    let text = format!("{:.*}", precision, v);
    let text = if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text.as_str()
    };

    // "-0" after rounding a tiny negative
    if text == "-0" {
        "0".to_string()
    } else {
        text.to_string()
    }
}

/// Labelled display rows for a solved triangle.
pub fn summary_rows(triangle: &Triangle) -> Vec<(String, String)> {
    let unit = triangle.unit.symbol();
    let len = |v: f64| format!("{} {}", display_value(Some(v), DEFAULT_PRECISION), unit);
    let deg = |v: f64| format!("{}°", display_value(Some(v), DEFAULT_PRECISION));

    vec![
        ("Side a".to_string(), len(triangle.sides.a)),
        ("Side b".to_string(), len(triangle.sides.b)),
        ("Side c".to_string(), len(triangle.sides.c)),
        ("Angle A".to_string(), deg(triangle.angles.a)),
        ("Angle B".to_string(), deg(triangle.angles.b)),
        ("Angle C".to_string(), deg(triangle.angles.c)),
        ("Perimeter".to_string(), len(triangle.perimeter)),
        (
            "Area".to_string(),
            format!("{} {}²", display_value(Some(triangle.area), DEFAULT_PRECISION), unit),
        ),
        ("Height to a".to_string(), len(triangle.altitudes.ha)),
        ("Height to b".to_string(), len(triangle.altitudes.hb)),
        ("Height to c".to_string(), len(triangle.altitudes.hc)),
        ("Type".to_string(), triangle.type_label()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::solve_triangle;
    use crate::normalize::TriangleFields;
    use crate::pattern::{CongruencePattern, Field};
    use crate::units::LinearUnit;

    #[test]
    fn test_display_value_trims() {
        assert_eq!(display_value(Some(12.0), 2), "12");
        assert_eq!(display_value(Some(12.345), 0), "12");
        assert_eq!(display_value(Some(0.1 + 0.2), 4), "0.3");
        assert_eq!(display_value(Some(-0.0001), 2), "0");
        assert_eq!(display_value(Some(f64::NAN), 2), "N/A");
    }

    #[test]
    fn test_summary_rows() {
        let fields = TriangleFields::new()
            .with(Field::SideA, 3.0)
            .with(Field::SideB, 4.0)
            .with(Field::SideC, 5.0);
        let tri = solve_triangle(CongruencePattern::Sss, &fields, LinearUnit::Foot)
            .unwrap()
            .unwrap();
        let rows = summary_rows(&tri);

        let get = |label: &str| {
            rows.iter()
                .find(|(l, _)| l == label)
                .map(|(_, v)| v.clone())
                .unwrap()
        };
        assert_eq!(get("Side c"), "5 ft");
        assert_eq!(get("Angle C"), "90°");
        assert_eq!(get("Area"), "6 ft²");
        assert_eq!(get("Height to c"), "2.4 ft");
        assert_eq!(get("Type"), "Right Scalene");
    }
}
